use freedns_domain::DnsAnswer;
use std::sync::Arc;
use tokio::time::Instant;

/// One cached answer and the instant it goes stale.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub answer: Arc<DnsAnswer>,
    pub expires_at: Instant,
}

impl CacheEntry {
    pub fn new(answer: Arc<DnsAnswer>, expires_at: Instant) -> Self {
        Self { answer, expires_at }
    }

    #[inline]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
