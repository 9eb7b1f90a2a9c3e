//! Static file serving

use axum::response::Html;

/// Canvas page that boots the asset dashboard WASM bundle from `/static/wasm`.
pub async fn serve_index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
