use serde::{Deserialize, Serialize};

/// The two resolvers queries are dispatched to.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Low-latency resolver whose answers may be poisoned for foreign names
    #[serde(default = "default_fast")]
    pub fast: String,

    /// Trusted resolver, consulted when the fast answer is unusable
    #[serde(default = "default_clean")]
    pub clean: String,

    /// Per-attempt deadline for one upstream exchange
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
}

fn default_fast() -> String {
    "114.114.114.114:53".to_string()
}

fn default_clean() -> String {
    "8.8.8.8:53".to_string()
}

fn default_query_timeout_ms() -> u64 {
    2000
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            fast: default_fast(),
            clean: default_clean(),
            query_timeout_ms: default_query_timeout_ms(),
        }
    }
}
