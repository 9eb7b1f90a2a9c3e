//! Selected asset details

use asset_monitor::AssetDetails;
use egui::{Color32, RichText, Ui};

const SECTION_HEADING: Color32 = Color32::from_rgb(107, 114, 128);

/// Returns true when the panel was closed.
pub fn details_panel(ui: &mut Ui, details: &AssetDetails) -> bool {
    let mut close = false;

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(RichText::new(&details.name).strong());
            ui.label(
                RichText::new(details.type_badge())
                    .small()
                    .color(Color32::from_rgb(67, 56, 202)),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            close = ui
                .small_button("X")
                .on_hover_text("Close details")
                .clicked();
        });
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            section_heading(ui, "Asset ID");
            ui.label(RichText::new(details.id.to_string()).monospace());
            ui.add_space(12.0);

            if let Some(description) = &details.description {
                section_heading(ui, "Description");
                ui.label(description.as_str());
                ui.add_space(12.0);
            }

            if !details.attributes.is_empty() {
                section_heading(ui, &details.attributes_heading());
                egui::Grid::new("asset_attributes")
                    .num_columns(2)
                    .striped(true)
                    .spacing([24.0, 6.0])
                    .show(ui, |ui| {
                        for (key, value) in &details.attributes {
                            ui.label(RichText::new(key).strong());
                            ui.label(value.as_str());
                            ui.end_row();
                        }
                    });
                ui.add_space(12.0);
            }

            if let Some(children) = details.children_label() {
                ui.label(RichText::new(children).color(Color32::from_rgb(30, 64, 175)));
                ui.add_space(12.0);
            }

            if !details.has_additional_details() {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("No additional details available for this asset").weak(),
                    );
                });
                ui.add_space(12.0);
            }

            ui.separator();
            ui.horizontal(|ui| {
                summary_tile(ui, "Type", &details.asset_type);
                summary_tile(ui, "Attributes", &details.attributes.len().to_string());
                summary_tile(ui, "Children", &details.child_count.to_string());
            });
        });

    close
}

fn section_heading(ui: &mut Ui, text: &str) {
    ui.label(
        RichText::new(text.to_uppercase())
            .small()
            .strong()
            .color(SECTION_HEADING),
    );
}

fn summary_tile(ui: &mut Ui, title: &str, value: &str) {
    egui::Frame::group(ui.style()).inner_margin(10.0).show(ui, |ui| {
        ui.set_min_width(96.0);
        ui.vertical(|ui| {
            ui.label(RichText::new(title.to_uppercase()).small().color(SECTION_HEADING));
            ui.label(RichText::new(value).size(20.0).strong());
        });
    });
}
