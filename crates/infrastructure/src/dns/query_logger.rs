use freedns_application::ports::QueryLogger;
use freedns_domain::{DnsAnswer, DnsQuery, UpstreamLabel};
use tracing::{info, warn};

/// `QueryLogger` that writes structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingQueryLogger;

impl TracingQueryLogger {
    pub fn new() -> Self {
        Self
    }
}

impl QueryLogger for TracingQueryLogger {
    fn query_handled(&self, query: &DnsQuery, answer: &DnsAnswer, upstream: UpstreamLabel) {
        if answer.is_success() {
            info!(
                op = "handle",
                domain = %query.domain,
                record_type = %query.record_type,
                transport = %query.transport,
                upstream = upstream.as_str(),
                status = %answer.status,
                "Query answered"
            );
        } else {
            warn!(
                op = "handle",
                domain = %query.domain,
                record_type = %query.record_type,
                transport = %query.transport,
                upstream = upstream.as_str(),
                status = %answer.status,
                "Query answered with error status"
            );
        }
    }

    fn cache_updated(&self, query: &DnsQuery, answer: &DnsAnswer, upstream: UpstreamLabel) {
        info!(
            op = "update_cache",
            domain = %query.domain,
            record_type = %query.record_type,
            upstream = upstream.as_str(),
            records = answer.records.len(),
            "Cache updated"
        );
    }
}
