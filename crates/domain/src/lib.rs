//! freedns domain layer
pub mod china_ip;
pub mod config;
pub mod dns_answer;
pub mod dns_query;
pub mod dns_record;
pub mod errors;

pub use china_ip::ChinaIpRanges;
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_answer::{DnsAnswer, ResponseStatus, UpstreamLabel};
pub use dns_query::{DnsQuery, QueryTransport};
pub use dns_record::{DnsClass, DnsRecord, RecordType};
pub use errors::DomainError;
