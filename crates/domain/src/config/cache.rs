use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Maximum number of cached answers
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Expiry used when an answer has no records or a zero TTL
    #[serde(default = "default_min_ttl_secs")]
    pub min_ttl_secs: u64,
}

fn default_capacity() -> usize {
    5000
}

fn default_min_ttl_secs() -> u64 {
    5
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            min_ttl_secs: default_min_ttl_secs(),
        }
    }
}
