use freedns_domain::{DnsAnswer, DnsQuery};
use std::sync::Arc;

/// Snapshot of cache counters for the periodic stats line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheMetricsSnapshot {
    pub total_entries: usize,
    pub capacity: usize,
    pub fresh_hits: u64,
    pub stale_hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub updates: u64,
    pub evictions: u64,
    pub hit_rate: f64,
}

/// Answer cache keyed by the full question.
///
/// Entries are served past their expiry; the caller decides whether to
/// refresh. Neither operation performs I/O or fails.
pub trait DnsCachePort: Send + Sync {
    /// Cached answer, if any, and whether it has expired. A hit marks the
    /// entry as most recently used.
    fn lookup(&self, query: &DnsQuery) -> (Option<Arc<DnsAnswer>>, bool);

    /// Insert or replace the entry for `query`. Only a new key at capacity
    /// evicts, and it evicts the least recently used entry.
    fn set(&self, query: &DnsQuery, answer: Arc<DnsAnswer>);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn metrics_snapshot(&self) -> CacheMetricsSnapshot;
}
