use freedns_domain::{DnsAnswer, DnsQuery, UpstreamLabel};

/// Sink for per-query observability events.
pub trait QueryLogger: Send + Sync {
    /// One line per answered question.
    fn query_handled(&self, query: &DnsQuery, answer: &DnsAnswer, upstream: UpstreamLabel);

    /// An answer was written to the cache.
    fn cache_updated(&self, query: &DnsQuery, answer: &DnsAnswer, upstream: UpstreamLabel);
}
