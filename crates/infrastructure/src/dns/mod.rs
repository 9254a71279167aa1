pub mod cache;
pub mod forwarding;
pub mod query_logger;
pub mod server;
pub mod transport;
pub mod upstream;

pub use cache::LazyDnsCache;
pub use query_logger::TracingQueryLogger;
pub use server::DnsServerHandler;
pub use upstream::UpstreamServer;
