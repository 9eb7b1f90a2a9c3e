//! Shared application state
//!
//! The asset "backend" is a fixed in-memory forest shared by every request.

use std::sync::Arc;

use asset_monitor::Asset;

/// Shared application state for the asset endpoints
#[derive(Clone)]
pub struct AppState {
    pub assets: Arc<Vec<Asset>>,
}

impl AppState {
    pub fn new(assets: Vec<Asset>) -> Self {
        Self {
            assets: Arc::new(assets),
        }
    }
}
