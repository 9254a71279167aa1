use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use crate::dns::transport::Transport;
use async_trait::async_trait;
use bytes::Bytes;
use freedns_application::ports::UpstreamClient;
use freedns_domain::{DnsAnswer, DnsQuery, DomainError};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// Plain DNS upstream reached over UDP or TCP, matching the client's
/// transport. No retry: a truncated UDP reply is returned as is so the
/// client can retry over TCP itself.
pub struct UpstreamServer {
    addr: SocketAddr,
    display: String,
    timeout: Duration,
}

impl UpstreamServer {
    pub fn new(addr: SocketAddr, timeout: Duration) -> Self {
        Self {
            addr,
            display: addr.to_string(),
            timeout,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

#[async_trait]
impl UpstreamClient for UpstreamServer {
    async fn query(&self, query: &DnsQuery) -> Result<DnsAnswer, DomainError> {
        let (id, message) = MessageBuilder::build_query(query)?;
        let transport = Transport::for_query(self.addr, query.transport);

        let response = transport.send(&message, self.timeout).await?;
        let parsed = ResponseParser::parse_bytes(Bytes::from(response.bytes))?;

        if parsed.id != id {
            return Err(DomainError::MismatchedResponseId {
                expected: id,
                received: parsed.id,
            });
        }

        debug!(
            server = %self.addr,
            protocol = transport.protocol_name(),
            domain = %query.domain,
            record_type = %query.record_type,
            rcode = %parsed.answer.status,
            truncated = parsed.truncated,
            "Upstream answered"
        );

        Ok(parsed.answer)
    }

    fn address(&self) -> &str {
        &self.display
    }
}
