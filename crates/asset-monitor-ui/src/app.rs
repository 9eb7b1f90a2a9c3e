//! Asset Monitor Application
//!
//! Layout (wide):
//! ┌──────────────┬──────────────────────────┐
//! │ Toolbar      │                          │
//! ├──────────────┤  Details / Landing       │
//! │ Tree         │                          │
//! └──────────────┴──────────────────────────┘
//!
//! Narrow screens show the tree or the details, never both.

use asset_monitor::{AssetDetails, AssetFetcher, DashboardView, ForestSummary, TreeRow};
use eframe::egui;

use crate::config::ClientConfig;
use crate::panels::{
    details_panel, error_screen, landing_panel, loading_screen, toolbar, tree_panel, ToolbarData,
};
use crate::state::{AppEvent, DomainState, LayoutMode, UiState, TREE_PANEL_WIDTH};

pub struct AssetMonitorApp {
    domain: DomainState,
    ui: UiState,

    // Tokio runtime for native builds
    #[cfg(not(target_arch = "wasm32"))]
    runtime: tokio::runtime::Runtime,
}

impl AssetMonitorApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> std::io::Result<Self> {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_config(ClientConfig::detect())
    }

    pub fn with_config(config: ClientConfig) -> std::io::Result<Self> {
        tracing::info!(
            base_url = %config.base_url,
            source = ?config.source,
            "Starting Asset Monitor"
        );

        #[cfg(not(target_arch = "wasm32"))]
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        let mut app = Self {
            domain: DomainState {
                fetcher: AssetFetcher::new(config.build_source()),
            },
            ui: UiState::default(),
            #[cfg(not(target_arch = "wasm32"))]
            runtime,
        };

        app.refetch();
        Ok(app)
    }

    // =========================================================================
    // FETCH
    // =========================================================================

    fn refetch(&mut self) {
        let task = self.domain.fetcher.refetch();
        if let Some(ticket) = self.domain.fetcher.state().latest_ticket() {
            tracing::info!(seq = ticket.seq(), "asset refresh requested");
        }

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(task);

        #[cfg(not(target_arch = "wasm32"))]
        {
            self.runtime.spawn(task);
        }
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::View(event) => self
                .ui
                .tree
                .apply(event, self.domain.fetcher.state().assets()),
            AppEvent::Refresh => self.refetch(),
        }
    }

    // =========================================================================
    // RENDER
    // =========================================================================

    fn render(&mut self, ctx: &egui::Context) {
        if self.domain.fetcher.poll() || self.domain.fetcher.is_busy() {
            ctx.request_repaint();
        }

        let state = self.domain.fetcher.state();

        // Refetches keep the current tree on screen
        if state.is_loading() && state.assets().is_empty() {
            egui::CentralPanel::default().show(ctx, loading_screen);
            return;
        }

        if let Some(message) = state.error() {
            let mut retry = false;
            egui::CentralPanel::default().show(ctx, |ui| {
                retry = error_screen(ui, message);
            });
            if retry {
                self.refetch();
            }
            return;
        }

        let events = self.render_dashboard(ctx);
        for event in events {
            self.handle_event(event);
        }
    }

    fn render_dashboard(&self, ctx: &egui::Context) -> Vec<AppEvent> {
        let tree_state = &self.ui.tree;
        let fetch_state = self.domain.fetcher.state();
        let view = DashboardView::derive(fetch_state.assets(), tree_state);
        let rows = view.rows(tree_state);
        let details = tree_state.selected.as_ref().map(AssetDetails::from_asset);
        let layout = LayoutMode::for_width(ctx.screen_rect().width(), tree_state);

        let data = ToolbarData {
            types: &view.types,
            type_filter: &tree_state.type_filter,
            name_query: &tree_state.name_query,
            show_filter: tree_state.show_filter,
            summary: view.summary,
            is_loading: fetch_state.is_loading(),
        };

        let mut events = Vec::new();

        if layout == LayoutMode::Split {
            egui::SidePanel::left("asset_tree")
                .resizable(false)
                .exact_width(TREE_PANEL_WIDTH)
                .show(ctx, |ui| tree_column(ui, &data, &rows, &mut events));
            egui::CentralPanel::default().show(ctx, |ui| {
                content_column(ui, details.as_ref(), &view.summary, &mut events)
            });
        } else {
            // Narrow: stacked means nothing is selected, so the content is the landing panel
            if layout.shows_tree() && layout.shows_content() {
                egui::TopBottomPanel::bottom("narrow_content")
                    .resizable(false)
                    .show(ctx, |ui| {
                        content_column(ui, details.as_ref(), &view.summary, &mut events)
                    });
            }
            egui::CentralPanel::default().show(ctx, |ui| {
                if layout.shows_tree() {
                    tree_column(ui, &data, &rows, &mut events);
                } else {
                    content_column(ui, details.as_ref(), &view.summary, &mut events);
                }
            });
        }

        events
    }
}

fn tree_column(
    ui: &mut egui::Ui,
    data: &ToolbarData<'_>,
    rows: &[TreeRow<'_>],
    events: &mut Vec<AppEvent>,
) {
    events.extend(toolbar(ui, data));
    ui.separator();
    if let Some(event) = tree_panel(ui, rows) {
        events.push(event.into());
    }
}

fn content_column(
    ui: &mut egui::Ui,
    details: Option<&AssetDetails>,
    summary: &ForestSummary,
    events: &mut Vec<AppEvent>,
) {
    match details {
        Some(details) => {
            if details_panel(ui, details) {
                events.push(asset_monitor::ViewEvent::CloseDetails.into());
            }
        }
        None => landing_panel(ui, summary),
    }
}

impl eframe::App for AssetMonitorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceKind;
    use asset_monitor::ViewEvent;
    use std::time::Duration;

    fn static_app() -> AssetMonitorApp {
        AssetMonitorApp::with_config(ClientConfig {
            source: SourceKind::Static,
            ..ClientConfig::default()
        })
        .unwrap()
    }

    fn settle(app: &mut AssetMonitorApp) {
        for _ in 0..400 {
            app.domain.fetcher.poll();
            if !app.domain.fetcher.is_busy() {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("fetch did not complete");
    }

    fn frame(app: &mut AssetMonitorApp, ctx: &egui::Context) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.render(ctx));
    }

    #[test]
    fn loads_bundled_assets_on_start() {
        let mut app = static_app();
        settle(&mut app);

        let state = app.domain.fetcher.state();
        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.assets().len(), 3);
    }

    #[test]
    fn renders_every_screen_without_panicking() {
        let ctx = egui::Context::default();
        let mut app = static_app();
        frame(&mut app, &ctx);

        settle(&mut app);
        frame(&mut app, &ctx);

        app.handle_event(ViewEvent::ToggleFilterPanel.into());
        app.handle_event(ViewEvent::ExpandAll.into());
        frame(&mut app, &ctx);

        let first = app.domain.fetcher.state().assets()[0].clone();
        app.handle_event(ViewEvent::Select(first).into());
        frame(&mut app, &ctx);

        app.handle_event(ViewEvent::SetNameQuery("no such asset".into()).into());
        frame(&mut app, &ctx);
    }

    #[test]
    fn narrow_frames_switch_between_tree_and_details() {
        let ctx = egui::Context::default();
        let mut app = static_app();
        settle(&mut app);

        let narrow = || egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(600.0, 800.0),
            )),
            ..Default::default()
        };

        let _ = ctx.run(narrow(), |ctx| app.render(ctx));
        assert_eq!(
            LayoutMode::for_width(600.0, &app.ui.tree),
            LayoutMode::NarrowStacked
        );

        let first = app.domain.fetcher.state().assets()[0].clone();
        app.handle_event(ViewEvent::Select(first).into());
        let _ = ctx.run(narrow(), |ctx| app.render(ctx));
        assert!(!LayoutMode::for_width(600.0, &app.ui.tree).shows_tree());

        app.handle_event(ViewEvent::CloseDetails.into());
        let _ = ctx.run(narrow(), |ctx| app.render(ctx));
        assert!(app.ui.tree.selected.is_none());
    }

    #[test]
    fn view_events_use_the_loaded_forest() {
        let mut app = static_app();
        settle(&mut app);

        app.handle_event(ViewEvent::ExpandAll.into());
        assert_eq!(app.ui.tree.expanded.len(), 5);

        app.handle_event(ViewEvent::SetTypeFilter("E".into()).into());
        app.handle_event(ViewEvent::ExpandAll.into());
        // Only the ancestors of the single type E asset stay expandable
        assert_eq!(app.ui.tree.expanded.len(), 2);
    }

    #[test]
    fn refresh_issues_a_new_request() {
        let mut app = static_app();
        settle(&mut app);
        let before = app.domain.fetcher.state().latest_ticket();

        app.handle_event(AppEvent::Refresh);
        assert_ne!(app.domain.fetcher.state().latest_ticket(), before);
        settle(&mut app);
        assert_eq!(app.domain.fetcher.state().assets().len(), 3);
    }
}
