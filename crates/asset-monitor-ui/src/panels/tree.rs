//! Asset tree rows

use asset_monitor::{TreeRow, ViewEvent};
use egui::{Color32, RichText, Ui};

/// Width reserved for the expand toggle so leaves line up with their siblings.
const TOGGLE_WIDTH: f32 = 20.0;

const SELECTED_FILL: Color32 = Color32::from_rgb(239, 246, 255);
const TYPE_BADGE: Color32 = Color32::from_rgb(67, 56, 202);

/// Renders the flattened rows; returns at most one click per frame.
pub fn tree_panel(ui: &mut Ui, rows: &[TreeRow<'_>]) -> Option<ViewEvent> {
    if rows.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.label(RichText::new("No assets match the filter").weak());
        });
        return None;
    }

    let mut event = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for row in rows {
                if let Some(clicked) = tree_row(ui, row) {
                    event = Some(clicked);
                }
            }
        });

    event
}

fn tree_row(ui: &mut Ui, row: &TreeRow<'_>) -> Option<ViewEvent> {
    let mut event = None;
    let fill = if row.selected {
        SELECTED_FILL
    } else {
        Color32::TRANSPARENT
    };

    egui::Frame::none()
        .fill(fill)
        .rounding(4.0)
        .inner_margin(egui::Margin::symmetric(0.0, 2.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.add_space(row.indent());

                if row.has_children {
                    let icon = if row.expanded { "⏷" } else { "⏵" };
                    if ui
                        .add_sized([TOGGLE_WIDTH, TOGGLE_WIDTH], egui::Button::new(icon).frame(false))
                        .clicked()
                    {
                        event = Some(ViewEvent::ToggleNode(row.asset.id));
                    }
                } else {
                    ui.add_space(TOGGLE_WIDTH);
                }

                let name = RichText::new(&row.asset.name).strong();
                if ui.selectable_label(row.selected, name).clicked() {
                    event = Some(ViewEvent::Select(row.asset.clone()));
                }
                ui.label(
                    RichText::new(format!("Type {}", row.asset.asset_type))
                        .small()
                        .color(TYPE_BADGE),
                );
            });
        });

    event
}
