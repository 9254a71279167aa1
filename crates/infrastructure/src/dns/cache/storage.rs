use super::{CacheEntry, CacheMetrics};
use freedns_application::ports::{CacheMetricsSnapshot, DnsCachePort};
use freedns_domain::{DnsAnswer, DnsQuery};
use lru::LruCache;
use rustc_hash::FxBuildHasher;
use std::num::NonZeroUsize;
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

/// Bounded LRU answer cache that keeps serving entries after they expire.
///
/// Expiry only flips the `needs_refresh` flag returned by `lookup`; entries
/// leave the cache solely through LRU eviction when a new key is inserted
/// at capacity. One mutex guards the store and is never held across an
/// `.await`.
pub struct LazyDnsCache {
    store: Mutex<LruCache<DnsQuery, CacheEntry, FxBuildHasher>>,
    capacity: NonZeroUsize,
    min_ttl: Duration,
    metrics: CacheMetrics,
}

impl LazyDnsCache {
    pub fn new(capacity: NonZeroUsize, min_ttl: Duration) -> Self {
        info!(
            capacity = capacity.get(),
            min_ttl_secs = min_ttl.as_secs(),
            "Answer cache created"
        );

        Self {
            store: Mutex::new(LruCache::with_hasher(capacity, FxBuildHasher)),
            capacity,
            min_ttl,
            metrics: CacheMetrics::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<DnsQuery, CacheEntry, FxBuildHasher>> {
        // Critical sections never leave the LRU half-updated.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DnsCachePort for LazyDnsCache {
    fn lookup(&self, query: &DnsQuery) -> (Option<Arc<DnsAnswer>>, bool) {
        let now = Instant::now();
        let mut store = self.lock();

        match store.get(query) {
            Some(entry) => {
                let needs_refresh = entry.is_expired(now);
                if needs_refresh {
                    CacheMetrics::incr(&self.metrics.stale_hits);
                } else {
                    CacheMetrics::incr(&self.metrics.fresh_hits);
                }
                (Some(Arc::clone(&entry.answer)), needs_refresh)
            }
            None => {
                CacheMetrics::incr(&self.metrics.misses);
                (None, false)
            }
        }
    }

    fn set(&self, query: &DnsQuery, answer: Arc<DnsAnswer>) {
        let expires_at = Instant::now() + answer.effective_ttl(self.min_ttl);
        let entry = CacheEntry::new(answer, expires_at);
        let mut store = self.lock();

        if let Some(existing) = store.get_mut(query) {
            *existing = entry;
            CacheMetrics::incr(&self.metrics.updates);
            return;
        }

        if let Some((evicted, _)) = store.push(query.clone(), entry) {
            CacheMetrics::incr(&self.metrics.evictions);
            debug!(
                domain = %evicted.domain,
                record_type = %evicted.record_type,
                "Evicted least recently used entry"
            );
        }
        CacheMetrics::incr(&self.metrics.insertions);
    }

    fn len(&self) -> usize {
        self.lock().len()
    }

    fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        let m = &self.metrics;
        CacheMetricsSnapshot {
            total_entries: self.len(),
            capacity: self.capacity(),
            fresh_hits: m.fresh_hits.load(Ordering::Relaxed),
            stale_hits: m.stale_hits.load(Ordering::Relaxed),
            misses: m.misses.load(Ordering::Relaxed),
            insertions: m.insertions.load(Ordering::Relaxed),
            updates: m.updates.load(Ordering::Relaxed),
            evictions: m.evictions.load(Ordering::Relaxed),
            hit_rate: m.hit_rate(),
        }
    }
}
