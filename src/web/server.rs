//! HTTP server implementation

use anyhow::Context;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::config::{ServerConfig, DEFAULT_MAX_BODY_BYTES};

use super::handlers::{
    create_item, delete_item, get_item, list_items, stats_handler, update_item, AppState,
};

/// Build the application router with the default body limit
pub fn router(store: AppState) -> Router {
    router_with_body_limit(store, DEFAULT_MAX_BODY_BYTES)
}

/// Build the application router, accepting request bodies up to `limit` bytes
pub fn router_with_body_limit(store: AppState, limit: usize) -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
        .route("/stats", get(stats_handler))
        .layer(DefaultBodyLimit::max(limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}

/// Run the web server until Ctrl-C
pub async fn run_server(config: &ServerConfig, store: AppState) -> anyhow::Result<()> {
    let app = router_with_body_limit(store, config.max_body_bytes);

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    info!("Item API available at http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => warn!("Failed to listen for Ctrl-C: {}", e),
    }
}
