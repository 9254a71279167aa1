//! Configuration for freedns
//!
//! - `root`: main configuration, CLI overrides, loading and validation
//! - `server`: listen address
//! - `upstream`: fast and clean resolvers
//! - `cache`: answer cache sizing
//! - `classifier`: China address table
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod cache;
pub mod classifier;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod upstream;

pub use cache::CacheConfig;
pub use classifier::ClassifierConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{normalize_address, CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
