use anyhow::Context;
use itemdb::{config::ServerConfig, seed, web, ItemStore};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = ServerConfig::default();

    // RUST_LOG overrides the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!("itemdb starting...");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;
    info!("Runtime using {} worker threads", config.worker_threads);

    let store = if config.seed {
        let items = seed::default_items();
        info!("Seeding store with {} items", items.len());
        ItemStore::with_items(items)
    } else {
        ItemStore::new()
    };

    runtime.block_on(web::run_server(&config, Arc::new(store)))
}
