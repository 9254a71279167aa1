use anyhow::Context;
use freedns_application::ports::{AddressClassifier, DnsCachePort};
use freedns_application::services::UpstreamArbiter;
use freedns_application::use_cases::HandleDnsQueryUseCase;
use freedns_domain::{ChinaIpRanges, Config};
use freedns_infrastructure::dns::{
    DnsServerHandler, LazyDnsCache, TracingQueryLogger, UpstreamServer,
};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::info;

/// Everything the listener needs, wired from one validated `Config`.
pub struct DnsServices {
    pub cache: Arc<LazyDnsCache>,
    pub handler: DnsServerHandler,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let classifier = Arc::new(load_classifier(config)?);

        let timeout = config.query_timeout();
        let fast = Arc::new(UpstreamServer::new(config.fast_addr()?, timeout));
        let clean = Arc::new(UpstreamServer::new(config.clean_addr()?, timeout));

        let arbiter = Arc::new(UpstreamArbiter::new(
            fast,
            clean,
            classifier as Arc<dyn AddressClassifier>,
        ));

        let capacity = NonZeroUsize::new(config.cache.capacity)
            .context("cache.capacity must be greater than zero")?;
        let cache = Arc::new(LazyDnsCache::new(capacity, config.min_ttl()));

        let use_case = Arc::new(HandleDnsQueryUseCase::new(
            arbiter,
            Arc::clone(&cache) as Arc<dyn DnsCachePort>,
            Arc::new(TracingQueryLogger::new()),
        ));

        Ok(Self {
            cache,
            handler: DnsServerHandler::new(use_case),
        })
    }
}

fn load_classifier(config: &Config) -> anyhow::Result<ChinaIpRanges> {
    let ranges = match &config.classifier.china_ip_list {
        Some(path) => ChinaIpRanges::from_file(path)
            .with_context(|| format!("loading China IP list {}", path.display()))?,
        None => ChinaIpRanges::builtin(),
    };

    info!(
        ranges = ranges.len(),
        source = config
            .classifier
            .china_ip_list
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "builtin".to_string()),
        "China IP table loaded"
    );

    Ok(ranges)
}
