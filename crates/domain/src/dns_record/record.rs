use super::RecordType;
use std::net::IpAddr;
use std::sync::Arc;

/// Summary of one answer-section record.
///
/// The full rdata stays in the upstream wire message; this view only keeps
/// what the proxy reasons about: owner name, type, TTL and the address for
/// A/AAAA records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    /// Owner name
    pub name: Arc<str>,
    /// Record type
    pub record_type: RecordType,
    /// Time to live in seconds
    pub ttl: u32,
    /// Address carried by A/AAAA records
    pub address: Option<IpAddr>,
}

impl DnsRecord {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType, ttl: u32) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            address: None,
        }
    }

    pub fn address(name: impl Into<Arc<str>>, ttl: u32, address: IpAddr) -> Self {
        let record_type = match address {
            IpAddr::V4(_) => RecordType::A,
            IpAddr::V6(_) => RecordType::AAAA,
        };
        Self {
            name: name.into(),
            record_type,
            ttl,
            address: Some(address),
        }
    }

    /// Check if record is expired based on seconds elapsed since it was received
    pub fn is_expired(&self, elapsed_secs: u32) -> bool {
        elapsed_secs >= self.ttl
    }

    /// Get remaining TTL
    pub fn remaining_ttl(&self, elapsed_secs: u32) -> u32 {
        self.ttl.saturating_sub(elapsed_secs)
    }
}
