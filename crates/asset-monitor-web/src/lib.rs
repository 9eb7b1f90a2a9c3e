//! Asset Monitor web server
//!
//! Serves the egui dashboard (WASM) and the asset API it reads from.

pub mod config;
pub mod routes;
pub mod state;

use std::path::Path;

use axum::{routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

pub use config::{ConfigError, ServerConfig};
pub use state::AppState;

/// Build the full axum router with all routes and layers.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    // CORS for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/assets", get(routes::api::list_assets))
        .route("/health", get(routes::api::health))
        // WASM bundle with no-cache headers for development
        .nest_service(
            "/static",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::overriding(
                    CACHE_CONTROL,
                    HeaderValue::from_static("no-cache, no-store, must-revalidate"),
                ))
                .service(ServeDir::new(static_dir).precompressed_gzip()),
        )
        // Index.html at root (egui app)
        .route("/", get(routes::static_files::serve_index))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
