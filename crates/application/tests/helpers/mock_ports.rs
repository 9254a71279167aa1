use async_trait::async_trait;
use freedns_application::ports::{
    AddressClassifier, CacheMetricsSnapshot, DnsCachePort, QueryLogger, UpstreamClient,
};
use freedns_domain::{DnsAnswer, DnsQuery, DomainError, UpstreamLabel};
use std::collections::{HashMap, HashSet};
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

// ============================================================================
// Mock UpstreamClient
// ============================================================================

#[derive(Clone)]
pub struct MockUpstream {
    name: &'static str,
    responses: Arc<RwLock<HashMap<String, DnsAnswer>>>,
    should_fail: Arc<RwLock<bool>>,
    calls: Arc<AtomicUsize>,
}

impl MockUpstream {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            responses: Arc::new(RwLock::new(HashMap::new())),
            should_fail: Arc::new(RwLock::new(false)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub async fn set_response(&self, domain: &str, answer: DnsAnswer) {
        self.responses
            .write()
            .await
            .insert(domain.to_string(), answer);
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamClient for MockUpstream {
    async fn query(&self, query: &DnsQuery) -> Result<DnsAnswer, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if *self.should_fail.read().await {
            return Err(DomainError::TransportTimeout {
                server: self.name.to_string(),
            });
        }

        self.responses
            .read()
            .await
            .get(query.domain.as_ref())
            .cloned()
            .ok_or_else(|| DomainError::TransportIo {
                server: self.name.to_string(),
                reason: format!("no mock response for {}", query.domain),
            })
    }

    fn address(&self) -> &str {
        self.name
    }
}

// ============================================================================
// Mock AddressClassifier
// ============================================================================

#[derive(Clone, Default)]
pub struct MockClassifier {
    domestic: Arc<HashSet<IpAddr>>,
    calls: Arc<AtomicUsize>,
}

impl MockClassifier {
    pub fn with_domestic(addresses: &[&str]) -> Self {
        Self {
            domestic: Arc::new(addresses.iter().map(|a| a.parse().unwrap()).collect()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AddressClassifier for MockClassifier {
    fn is_domestic(&self, ip: IpAddr) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.domestic.contains(&ip)
    }
}

// ============================================================================
// Mock DnsCachePort
// ============================================================================

/// Unbounded map cache whose entries can be marked stale by hand.
#[derive(Clone, Default)]
pub struct MockCache {
    entries: Arc<Mutex<HashMap<DnsQuery, (Arc<DnsAnswer>, bool)>>>,
    sets: Arc<AtomicUsize>,
}

impl MockCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, query: &DnsQuery, answer: DnsAnswer, stale: bool) {
        self.entries
            .lock()
            .unwrap()
            .insert(query.clone(), (Arc::new(answer), stale));
    }

    pub fn get(&self, query: &DnsQuery) -> Option<(Arc<DnsAnswer>, bool)> {
        self.entries.lock().unwrap().get(query).cloned()
    }

    pub fn sets(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }
}

impl DnsCachePort for MockCache {
    fn lookup(&self, query: &DnsQuery) -> (Option<Arc<DnsAnswer>>, bool) {
        match self.entries.lock().unwrap().get(query) {
            Some((answer, stale)) => (Some(Arc::clone(answer)), *stale),
            None => (None, false),
        }
    }

    fn set(&self, query: &DnsQuery, answer: Arc<DnsAnswer>) {
        self.sets.fetch_add(1, Ordering::SeqCst);
        self.entries
            .lock()
            .unwrap()
            .insert(query.clone(), (answer, false));
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            total_entries: self.len(),
            insertions: self.sets() as u64,
            ..Default::default()
        }
    }
}

// ============================================================================
// Recording QueryLogger
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEvent {
    Handled {
        domain: String,
        upstream: UpstreamLabel,
        success: bool,
    },
    CacheUpdated {
        domain: String,
        upstream: UpstreamLabel,
    },
}

#[derive(Clone, Default)]
pub struct RecordingLogger {
    events: Arc<Mutex<Vec<LogEvent>>>,
}

impl RecordingLogger {
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn cache_updates(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, LogEvent::CacheUpdated { .. }))
            .count()
    }
}

impl QueryLogger for RecordingLogger {
    fn query_handled(&self, query: &DnsQuery, answer: &DnsAnswer, upstream: UpstreamLabel) {
        self.events.lock().unwrap().push(LogEvent::Handled {
            domain: query.domain.to_string(),
            upstream,
            success: answer.is_success(),
        });
    }

    fn cache_updated(&self, query: &DnsQuery, _answer: &DnsAnswer, upstream: UpstreamLabel) {
        self.events.lock().unwrap().push(LogEvent::CacheUpdated {
            domain: query.domain.to_string(),
            upstream,
        });
    }
}
