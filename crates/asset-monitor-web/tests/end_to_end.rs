//! Real server on an ephemeral port, read back through the HTTP asset source.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use pretty_assertions::assert_eq;

use asset_monitor::sample::sample_forest;
use asset_monitor::{fetch_assets, AssetFetcher, FetchError, HttpAssetSource};
use asset_monitor_web::{build_router, AppState};

async fn spawn_server() -> SocketAddr {
    let static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static");
    let app = build_router(AppState::new(sample_forest()), &static_dir);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn http_source_reads_the_served_forest() {
    let addr = spawn_server().await;
    let source = HttpAssetSource::from_base_url(&format!("http://{}/", addr));
    assert_eq!(source.url(), format!("http://{}/api/assets", addr));

    let assets = fetch_assets(&source).await.unwrap();
    assert_eq!(assets, sample_forest());
}

#[tokio::test]
async fn missing_endpoint_reports_http_status() {
    let addr = spawn_server().await;
    let source = HttpAssetSource::new(format!("http://{}/api/missing", addr));

    let err = fetch_assets(&source).await.unwrap_err();
    assert_eq!(
        err,
        FetchError::Transport("HTTP error! status: 404".to_string())
    );
}

#[tokio::test]
async fn non_json_body_is_a_transport_error() {
    let addr = spawn_server().await;
    // The index page is HTML
    let source = HttpAssetSource::new(format!("http://{}/", addr));

    match fetch_assets(&source).await {
        Err(FetchError::Transport(message)) => assert!(!message.is_empty()),
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn fetcher_loads_from_live_server() {
    let addr = spawn_server().await;
    let source = Arc::new(HttpAssetSource::from_base_url(&format!("http://{}", addr)));
    let mut fetcher = AssetFetcher::new(source);
    assert!(fetcher.state().is_loading());

    tokio::spawn(fetcher.refetch()).await.unwrap();

    assert!(fetcher.poll());
    assert!(!fetcher.state().is_loading());
    assert_eq!(fetcher.state().error(), None);
    assert_eq!(fetcher.state().assets(), sample_forest().as_slice());
}
