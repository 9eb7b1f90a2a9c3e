//! Asset Monitor Web Server
//!
//! Serves the egui-based dashboard via WASM and the asset API it reads from.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use asset_monitor::sample::sample_forest;
use asset_monitor_web::{build_router, config::DEFAULT_LOG_FILTER, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Asset Monitor Web Server");

    let config = ServerConfig::from_env().context("invalid server configuration")?;
    tracing::info!("Serving static files from: {}", config.static_dir.display());

    let state = AppState::new(sample_forest());
    let app = build_router(state, &config.static_dir);

    let addr = config.bind_addr();
    tracing::info!("");
    tracing::info!("===========================================");
    tracing::info!("  Asset Monitor running on http://{}", addr);
    tracing::info!("===========================================");
    tracing::info!("");
    tracing::info!("UI: http://localhost:{}", config.port);
    tracing::info!("");
    tracing::info!("API Endpoints:");
    tracing::info!("  /api/assets  - Asset hierarchy");
    tracing::info!("  /health      - Liveness check");
    tracing::info!("");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
