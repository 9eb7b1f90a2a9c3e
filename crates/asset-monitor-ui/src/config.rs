//! Client configuration
//!
//! In the browser the API base URL is the page origin and `?source=static`
//! switches to the bundled dataset. Native builds read `ASSET_MONITOR_URL`
//! and `ASSET_MONITOR_SOURCE` instead.

use std::sync::Arc;

use asset_monitor::sample::sample_forest;
use asset_monitor::{AssetSource, HttpAssetSource, StaticAssetSource};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Where assets come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// `GET {base_url}/api/assets`
    #[default]
    Http,
    /// Bundled sample dataset, no network
    Static,
}

impl SourceKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "http" | "api" => Some(Self::Http),
            "static" => Some(Self::Static),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub source: SourceKind,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            source: SourceKind::Http,
        }
    }
}

impl ClientConfig {
    #[cfg(target_arch = "wasm32")]
    pub fn detect() -> Self {
        let location = web_sys::window().map(|w| w.location());
        let base_url = location
            .as_ref()
            .and_then(|l| l.origin().ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let search = location
            .as_ref()
            .and_then(|l| l.search().ok())
            .unwrap_or_default();

        Self {
            base_url,
            source: resolve_source(query_param(&search, "source")),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn detect() -> Self {
        let base_url =
            std::env::var("ASSET_MONITOR_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let source = std::env::var("ASSET_MONITOR_SOURCE").ok();

        Self {
            base_url,
            source: resolve_source(source.as_deref()),
        }
    }

    pub fn build_source(&self) -> Arc<dyn AssetSource> {
        match self.source {
            SourceKind::Http => Arc::new(HttpAssetSource::from_base_url(&self.base_url)),
            SourceKind::Static => Arc::new(StaticAssetSource::from_assets(&sample_forest())),
        }
    }
}

fn resolve_source(raw: Option<&str>) -> SourceKind {
    match raw {
        None => SourceKind::default(),
        Some(value) => SourceKind::parse(value).unwrap_or_else(|| {
            tracing::warn!(value, "unknown asset source, falling back to http");
            SourceKind::default()
        }),
    }
}

/// Value of `key` in a `?a=1&b=2` query string.
pub fn query_param<'a>(search: &'a str, key: &str) -> Option<&'a str> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}
