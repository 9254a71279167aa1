use freedns_domain::{DnsAnswer, DnsQuery, UpstreamLabel};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{DnsCachePort, QueryLogger};
use crate::services::UpstreamArbiter;

/// Answers one question: cache first, upstreams on a miss.
///
/// Expired entries are still served; the hit spawns a detached refresh
/// that replaces the entry once the upstreams answer. Only successful
/// answers are cached.
pub struct HandleDnsQueryUseCase {
    arbiter: Arc<UpstreamArbiter>,
    cache: Arc<dyn DnsCachePort>,
    logger: Arc<dyn QueryLogger>,
}

impl HandleDnsQueryUseCase {
    pub fn new(
        arbiter: Arc<UpstreamArbiter>,
        cache: Arc<dyn DnsCachePort>,
        logger: Arc<dyn QueryLogger>,
    ) -> Self {
        Self {
            arbiter,
            cache,
            logger,
        }
    }

    #[instrument(skip(self, query), fields(domain = %query.domain, record_type = %query.record_type))]
    pub async fn execute(&self, query: &DnsQuery) -> (Arc<DnsAnswer>, UpstreamLabel) {
        let (answer, upstream) = match self.cache.lookup(query) {
            (Some(answer), needs_refresh) => {
                if needs_refresh {
                    self.spawn_refresh(query.clone());
                }
                (answer, UpstreamLabel::Cache)
            }
            (None, _) => {
                let (answer, upstream) = self.arbiter.resolve(query).await;
                let answer = Arc::new(answer);
                store(&*self.cache, &*self.logger, query, &answer, upstream);
                (answer, upstream)
            }
        };

        self.logger.query_handled(query, &answer, upstream);
        (answer, upstream)
    }

    fn spawn_refresh(&self, query: DnsQuery) {
        let arbiter = Arc::clone(&self.arbiter);
        let cache = Arc::clone(&self.cache);
        let logger = Arc::clone(&self.logger);

        debug!(domain = %query.domain, record_type = %query.record_type, "Refreshing stale entry");

        tokio::spawn(async move {
            let (answer, upstream) = arbiter.resolve(&query).await;
            store(&*cache, &*logger, &query, &Arc::new(answer), upstream);
        });
    }
}

fn store(
    cache: &dyn DnsCachePort,
    logger: &dyn QueryLogger,
    query: &DnsQuery,
    answer: &Arc<DnsAnswer>,
    upstream: UpstreamLabel,
) {
    if !answer.is_success() {
        return;
    }
    cache.set(query, Arc::clone(answer));
    logger.cache_updated(query, answer, upstream);
}
