use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct CacheMetrics {
    pub fresh_hits: AtomicU64,
    pub stale_hits: AtomicU64,
    pub misses: AtomicU64,
    pub insertions: AtomicU64,
    pub updates: AtomicU64,
    pub evictions: AtomicU64,
}

impl CacheMetrics {
    /// Percentage of lookups answered from the cache, stale or not.
    pub fn hit_rate(&self) -> f64 {
        let hits = (self.fresh_hits.load(Ordering::Relaxed)
            + self.stale_hits.load(Ordering::Relaxed)) as f64;
        let total = hits + self.misses.load(Ordering::Relaxed) as f64;

        if total > 0.0 {
            (hits / total) * 100.0
        } else {
            0.0
        }
    }

    #[inline]
    pub(crate) fn incr(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }
}
