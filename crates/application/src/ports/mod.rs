pub mod address_classifier;
pub mod dns_cache;
pub mod query_logger;
pub mod upstream_client;

pub use address_classifier::AddressClassifier;
pub use dns_cache::{CacheMetricsSnapshot, DnsCachePort};
pub use query_logger::QueryLogger;
pub use upstream_client::UpstreamClient;
