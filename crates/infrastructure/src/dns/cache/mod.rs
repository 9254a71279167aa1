pub mod entry;
pub mod metrics;
pub mod storage;

pub use entry::CacheEntry;
pub use metrics::CacheMetrics;
pub use storage::LazyDnsCache;
