use super::{DnsClass, RecordType};
use std::fmt;
use std::sync::Arc;

/// Transport a query arrived on.
///
/// Part of the cache key: a record set fetched over a datagram may have been
/// truncated, and must not be replayed to a stream client (or vice versa).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryTransport {
    Datagram,
    Stream,
}

impl QueryTransport {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryTransport::Datagram => "udp",
            QueryTransport::Stream => "tcp",
        }
    }
}

impl fmt::Display for QueryTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// DNS question plus the request attributes that change the answer.
/// Uses `Arc<str>` for cheap cloning across use case → cache → refresh task.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub class: DnsClass,
    pub recursion_desired: bool,
    pub transport: QueryTransport,
}

impl DnsQuery {
    /// Recursive `IN` question over UDP, the common case.
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            class: DnsClass::IN,
            recursion_desired: true,
            transport: QueryTransport::Datagram,
        }
    }

    pub fn with_class(mut self, class: DnsClass) -> Self {
        self.class = class;
        self
    }

    pub fn with_recursion_desired(mut self, recursion_desired: bool) -> Self {
        self.recursion_desired = recursion_desired;
        self
    }

    pub fn with_transport(mut self, transport: QueryTransport) -> Self {
        self.transport = transport;
        self
    }
}
