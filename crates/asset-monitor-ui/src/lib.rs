//! Asset Monitor UI - egui dashboard over the asset hierarchy

pub mod app;
pub mod config;
pub mod panels;
pub mod state;

pub use app::AssetMonitorApp;
pub use config::{ClientConfig, SourceKind};

/// Id of the `<canvas>` in `static/index.html`.
pub const CANVAS_ID: &str = "asset_monitor_canvas";

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    web_sys::console::log_1(&"=== Asset Monitor UI WASM loaded ===".into());

    wasm_bindgen_futures::spawn_local(async {
        let Some(canvas) = canvas_element(CANVAS_ID) else {
            tracing::error!("Canvas #{} not found", CANVAS_ID);
            return;
        };

        let started = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(AssetMonitorApp::new(cc)?))),
            )
            .await;

        if let Err(e) = started {
            tracing::error!("Failed to start eframe: {:?}", e);
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn canvas_element(id: &str) -> Option<web_sys::HtmlCanvasElement> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .ok()
}
