//! REST API endpoints
//!
//! `GET /api/assets` answers with the `{success, data, message}` envelope;
//! clients also accept a bare array, but this server always wraps.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use asset_monitor::AssetsResponse;

use crate::state::AppState;

// =============================================================================
// ASSETS
// =============================================================================

pub async fn list_assets(State(state): State<AppState>) -> Json<AssetsResponse> {
    tracing::debug!(roots = state.assets.len(), "serving asset forest");
    Json(AssetsResponse::ok(state.assets.as_ref().clone()))
}

// =============================================================================
// HEALTH
// =============================================================================

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
