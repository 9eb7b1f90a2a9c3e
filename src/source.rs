//! Asset sources
//!
//! The dashboard reads its forest either from the `/api/assets` endpoint or
//! from an in-memory constant. Both sit behind [`AssetSource`] so the fetch
//! state never knows which deployment variant it is talking to.

use async_trait::async_trait;
use serde_json::Value;

use asset_monitor_types::Asset;

use crate::error::FetchError;
use crate::normalize::normalize_payload;

/// Path of the asset retrieval endpoint.
pub const ASSETS_PATH: &str = "/api/assets";

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait AssetSource: Send + Sync {
    /// Retrieve the raw, not yet normalized payload.
    async fn fetch_payload(&self) -> Result<Value, FetchError>;

    /// Human-readable origin for logs.
    fn describe(&self) -> String;
}

/// Retrieve and normalize in one step.
pub async fn fetch_assets(source: &dyn AssetSource) -> Result<Vec<Asset>, FetchError> {
    let payload = source.fetch_payload().await?;
    normalize_payload(payload)
}

// =============================================================================
// HTTP
// =============================================================================

/// `GET`s a JSON endpoint.
#[derive(Debug, Clone)]
pub struct HttpAssetSource {
    url: String,
}

impl HttpAssetSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Point at `/api/assets` under `base_url`.
    pub fn from_base_url(base_url: &str) -> Self {
        Self::new(format!("{}{}", base_url.trim_end_matches('/'), ASSETS_PATH))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl AssetSource for HttpAssetSource {
    async fn fetch_payload(&self) -> Result<Value, FetchError> {
        let response = reqwest::get(&self.url)
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::http_status(response.status().as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::network(e.to_string()))
    }

    fn describe(&self) -> String {
        format!("GET {}", self.url)
    }
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// Serves a fixed payload, like the static build of the dashboard.
#[derive(Debug, Clone)]
pub struct StaticAssetSource {
    payload: Value,
}

impl StaticAssetSource {
    /// The forest as a bare JSON array.
    pub fn from_assets(assets: &[Asset]) -> Self {
        Self {
            payload: serde_json::json!(assets),
        }
    }

    /// Any payload; it still goes through normalization.
    pub fn from_payload(payload: Value) -> Self {
        Self { payload }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl AssetSource for StaticAssetSource {
    async fn fetch_payload(&self) -> Result<Value, FetchError> {
        Ok(self.payload.clone())
    }

    fn describe(&self) -> String {
        "in-memory dataset".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_forest;
    use serde_json::json;

    #[tokio::test]
    async fn static_source_round_trips_the_forest() {
        let source = StaticAssetSource::from_assets(&sample_forest());
        let assets = fetch_assets(&source).await.unwrap();
        assert_eq!(assets, sample_forest());
    }

    #[tokio::test]
    async fn static_source_payload_is_normalized() {
        let source = StaticAssetSource::from_payload(json!({ "success": false, "message": "X" }));
        let err = fetch_assets(&source).await.unwrap_err();
        assert_eq!(err, FetchError::ApiReported("X".into()));
    }

    #[test]
    fn base_url_joins_assets_path() {
        assert_eq!(
            HttpAssetSource::from_base_url("http://localhost:3000/").url(),
            "http://localhost:3000/api/assets"
        );
        assert_eq!(
            HttpAssetSource::from_base_url("http://localhost:3000").url(),
            "http://localhost:3000/api/assets"
        );
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let source = HttpAssetSource::new(format!("http://127.0.0.1:{}/api/assets", port));
        match fetch_assets(&source).await {
            Err(FetchError::Transport(message)) => assert!(!message.is_empty()),
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}
