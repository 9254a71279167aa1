use bytes::Bytes;
use freedns_domain::{DnsAnswer, DnsQuery, DnsRecord, QueryTransport, RecordType, ResponseStatus};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType as HickoryRecordType};
use std::net::IpAddr;
use std::str::FromStr;

pub fn query_a(domain: &str) -> DnsQuery {
    DnsQuery::new(domain, RecordType::A)
}

pub fn tcp_query_a(domain: &str) -> DnsQuery {
    query_a(domain).with_transport(QueryTransport::Stream)
}

/// Successful answer whose records all share `ttl`.
pub fn answer_with_ttl(domain: &str, ttl: u32, addresses: &[&str]) -> DnsAnswer {
    let records = addresses
        .iter()
        .map(|a| DnsRecord::address(domain, ttl, a.parse::<IpAddr>().unwrap()))
        .collect();
    DnsAnswer::new(ResponseStatus::Success, records, Bytes::new())
}

pub fn answer(domain: &str, addresses: &[&str]) -> DnsAnswer {
    answer_with_ttl(domain, 300, addresses)
}

/// Client-side wire query, as a stub resolver would send it.
pub fn client_query(id: u16, domain: &str, record_type: HickoryRecordType) -> Vec<u8> {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(Query::query(Name::from_str(domain).unwrap(), record_type));
    message.to_vec().unwrap()
}
