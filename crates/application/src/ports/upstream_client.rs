use async_trait::async_trait;
use freedns_domain::{DnsAnswer, DnsQuery, DomainError};

/// One upstream resolver.
///
/// Implementations send the question over the same transport it arrived on
/// and bound every exchange with a timeout. Any answer the upstream returns,
/// including NXDOMAIN or SERVFAIL, is `Ok`; `Err` means no usable reply.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn query(&self, query: &DnsQuery) -> Result<DnsAnswer, DomainError>;

    /// Address shown in logs.
    fn address(&self) -> &str;
}
