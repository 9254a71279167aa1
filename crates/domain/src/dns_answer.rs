use super::DnsRecord;
use bytes::Bytes;
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

/// Response code of an answer, reduced to what the proxy distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseStatus {
    Success,
    NameError,
    ServerFailure,
    Refused,
    NotImplemented,
    FormatError,
    Other(u16),
}

impl ResponseStatus {
    pub fn from_u16(code: u16) -> Self {
        match code {
            0 => ResponseStatus::Success,
            1 => ResponseStatus::FormatError,
            2 => ResponseStatus::ServerFailure,
            3 => ResponseStatus::NameError,
            4 => ResponseStatus::NotImplemented,
            5 => ResponseStatus::Refused,
            other => ResponseStatus::Other(other),
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            ResponseStatus::Success => 0,
            ResponseStatus::FormatError => 1,
            ResponseStatus::ServerFailure => 2,
            ResponseStatus::NameError => 3,
            ResponseStatus::NotImplemented => 4,
            ResponseStatus::Refused => 5,
            ResponseStatus::Other(code) => *code,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::Success => "NOERROR",
            ResponseStatus::NameError => "NXDOMAIN",
            ResponseStatus::ServerFailure => "SERVFAIL",
            ResponseStatus::Refused => "REFUSED",
            ResponseStatus::NotImplemented => "NOTIMP",
            ResponseStatus::FormatError => "FORMERR",
            ResponseStatus::Other(_) => "UNKNOWN",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResponseStatus::Success)
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which source produced an answer. Observability only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpstreamLabel {
    Fast,
    Clean,
    Cache,
}

impl UpstreamLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpstreamLabel::Fast => "fast",
            UpstreamLabel::Clean => "clean",
            UpstreamLabel::Cache => "cache",
        }
    }
}

impl fmt::Display for UpstreamLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved answer: status, answer-section records, and the complete
/// upstream message in wire form.
///
/// Immutable once built. The cache hands out `Arc<DnsAnswer>` so a reader
/// never observes a partially replaced entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsAnswer {
    pub status: ResponseStatus,
    pub records: Arc<[DnsRecord]>,
    /// Wire bytes of the upstream response. Empty for synthesized answers.
    pub message: Bytes,
}

impl DnsAnswer {
    pub fn new(status: ResponseStatus, records: Vec<DnsRecord>, message: Bytes) -> Self {
        Self {
            status,
            records: Arc::from(records),
            message,
        }
    }

    /// Answer produced locally when no upstream could be reached.
    pub fn server_failure() -> Self {
        Self::new(ResponseStatus::ServerFailure, Vec::new(), Bytes::new())
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Addresses carried by A/AAAA records, in answer order.
    pub fn addresses(&self) -> impl Iterator<Item = IpAddr> + '_ {
        self.records.iter().filter_map(|r| r.address)
    }

    pub fn has_addresses(&self) -> bool {
        self.records.iter().any(|r| r.address.is_some())
    }

    /// Smallest TTL across the answer records, if any.
    pub fn min_ttl(&self) -> Option<u32> {
        self.records.iter().map(|r| r.ttl).min()
    }

    /// TTL used for cache expiry: the minimum record TTL, or `floor` when
    /// there are no records or the minimum is zero.
    pub fn effective_ttl(&self, floor: Duration) -> Duration {
        match self.min_ttl() {
            Some(ttl) if ttl > 0 => Duration::from_secs(u64::from(ttl)),
            _ => floor,
        }
    }
}
