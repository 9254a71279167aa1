use bytes::Bytes;
use freedns_domain::{DnsAnswer, DnsRecord, DomainError, ResponseStatus};
use hickory_proto::op::Message;
use hickory_proto::rr::RData;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

use super::record_type_map::RecordTypeMapper;

/// Upstream reply reduced to what the proxy needs.
#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub id: u16,
    pub truncated: bool,
    pub answer: DnsAnswer,
}

pub struct ResponseParser;

impl ResponseParser {
    /// Parses a DNS response from owned bytes; the bytes are kept in the
    /// answer without copying.
    pub fn parse_bytes(response_bytes: Bytes) -> Result<ParsedResponse, DomainError> {
        let message = Message::from_vec(&response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let status = ResponseStatus::from_u16(u16::from(message.response_code()));
        let truncated = message.truncated();

        let mut records = Vec::with_capacity(message.answers().len());
        for record in message.answers() {
            let name: Arc<str> = Arc::from(record.name().to_utf8());
            let ttl = record.ttl();

            let dns_record = match record.data() {
                Some(RData::A(a)) => DnsRecord::address(name, ttl, IpAddr::V4(a.0)),
                Some(RData::AAAA(aaaa)) => DnsRecord::address(name, ttl, IpAddr::V6(aaaa.0)),
                _ => DnsRecord::new(name, RecordTypeMapper::from_hickory(record.record_type()), ttl),
            };
            records.push(dns_record);
        }

        debug!(
            rcode = %status,
            answers = records.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(ParsedResponse {
            id: message.id(),
            truncated,
            answer: DnsAnswer::new(status, records, response_bytes),
        })
    }

    pub fn parse(response_bytes: &[u8]) -> Result<ParsedResponse, DomainError> {
        Self::parse_bytes(Bytes::copy_from_slice(response_bytes))
    }
}
