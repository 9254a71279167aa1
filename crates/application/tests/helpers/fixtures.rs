use bytes::Bytes;
use freedns_domain::{DnsAnswer, DnsQuery, DnsRecord, RecordType, ResponseStatus};
use std::net::IpAddr;
use std::time::Duration;

pub fn query_a(domain: &str) -> DnsQuery {
    DnsQuery::new(domain, RecordType::A)
}

pub fn query(domain: &str, record_type: RecordType) -> DnsQuery {
    DnsQuery::new(domain, record_type)
}

/// Successful answer with one A/AAAA record per address.
pub fn address_answer(domain: &str, addresses: &[&str]) -> DnsAnswer {
    let records = addresses
        .iter()
        .map(|a| DnsRecord::address(domain, 300, a.parse::<IpAddr>().unwrap()))
        .collect();
    DnsAnswer::new(ResponseStatus::Success, records, Bytes::new())
}

pub fn mx_answer(domain: &str) -> DnsAnswer {
    DnsAnswer::new(
        ResponseStatus::Success,
        vec![DnsRecord::new(domain, RecordType::MX, 300)],
        Bytes::new(),
    )
}

pub fn empty_answer(status: ResponseStatus) -> DnsAnswer {
    DnsAnswer::new(status, Vec::new(), Bytes::new())
}

/// Poll `condition` until it holds or one second of real time passes.
pub async fn eventually(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = std::time::Instant::now() + Duration::from_secs(1);
    while std::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    condition()
}
