//! Upload-status server - Main entry point
//!
//! Binds the listener, registers the upload-status route, and serves
//! requests until shutdown.

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use upload_status_server::config::AppConfig;
use upload_status_server::{router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,upload_status_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting upload-status server");

    // Load configuration
    let config = AppConfig::from_env();
    tracing::info!("Configuration loaded: {:?}", config);

    if config.debug {
        tracing::warn!("Debug mode enabled: error responses will include failure detail");
    }

    let addr = format!("{}:{}", config.host, config.port);
    let state = Arc::new(AppState { config });

    let app = router::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
