//! # FreeDNS
//!
//! Forwarding DNS proxy that answers from a fast upstream when its answer
//! points into mainland China and falls back to a clean upstream otherwise.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use freedns_application::ports::DnsCachePort;
use freedns_domain::CliOverrides;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const STATS_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Parser)]
#[command(name = "freedns")]
#[command(version)]
#[command(about = "DNS proxy that routes around poisoned answers")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Fast upstream, `ip` or `ip:port`
    #[arg(short = 'f', long)]
    fast: Option<String>,

    /// Clean upstream, `ip` or `ip:port`
    #[arg(short = 'C', long)]
    clean: Option<String>,

    /// Listen address, `ip` or `ip:port`
    #[arg(short = 'l', long)]
    listen: Option<String>,

    /// Maximum number of cached answers
    #[arg(long = "cache-cap")]
    cache_cap: Option<usize>,

    /// trace, debug, info, warn or error
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        fast: cli.fast,
        clean: cli.clean,
        listen: cli.listen,
        cache_capacity: cli.cache_cap,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        fast = %config.upstream.fast,
        clean = %config.upstream.clean,
        "Starting FreeDNS"
    );

    let services = di::DnsServices::new(&config)?;

    let cache = Arc::clone(&services.cache);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(STATS_INTERVAL);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let stats = cache.metrics_snapshot();
            info!(
                op = "stats",
                entries = stats.total_entries,
                capacity = stats.capacity,
                fresh_hits = stats.fresh_hits,
                stale_hits = stats.stale_hits,
                misses = stats.misses,
                evictions = stats.evictions,
                hit_rate = stats.hit_rate,
                "Cache stats"
            );
        }
    });

    server::start_dns_server(config.listen_addr()?, services.handler).await
}
