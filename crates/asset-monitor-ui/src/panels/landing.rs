//! Shown in place of the details panel while nothing is selected.

use asset_monitor::ForestSummary;
use egui::{RichText, Ui};

pub fn landing_panel(ui: &mut Ui, summary: &ForestSummary) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(RichText::new("Asset Monitoring Dashboard").size(20.0).strong());
        ui.label(RichText::new("Select an asset from the tree to view its details").weak());
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            stat_card(ui, "Total Assets", summary.total);
            stat_card(ui, "Asset Types", summary.type_count);
        });
    });
}

fn stat_card(ui: &mut Ui, title: &str, value: usize) {
    egui::Frame::group(ui.style()).inner_margin(12.0).show(ui, |ui| {
        ui.set_min_width(120.0);
        ui.vertical(|ui| {
            ui.label(RichText::new(title).small().weak());
            ui.label(RichText::new(value.to_string()).size(24.0).strong());
        });
    });
}
