//! pressure-watcher server entry point.
//!
//! Starts the Axum HTTP server with the health and upload endpoints.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use pressure_watcher::api;
use pressure_watcher::app_state::AppState;
use pressure_watcher::config::AppConfig;
use pressure_watcher::extractor::StubExtractor;
use pressure_watcher::persistence::initialize_store;
use pressure_watcher::service::ReadingService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting pressure-watcher");

    // Resolve the document store once for the lifetime of the process.
    // Failure degrades to storage-less mode instead of aborting startup.
    let store = initialize_store(&config).await;

    // Build service layer
    let reading_service = Arc::new(ReadingService::new(Arc::new(StubExtractor), store));

    // Build application state
    let app_state = AppState { reading_service };

    // Build router. CORS is wide open while the service is
    // development-stage; restrict before production use.
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Resource cleanup hook: nothing to release today, the store handle
    // drops with the process.
    tracing::info!("shutdown complete");

    Ok(())
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
