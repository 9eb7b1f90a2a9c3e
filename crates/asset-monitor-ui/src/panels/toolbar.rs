//! Tree header: title, filter controls, search box and counters.

use asset_monitor::{ForestSummary, ViewEvent};
use egui::{Color32, RichText, Ui};

use crate::state::AppEvent;

/// Data needed to render the toolbar (extracted before render)
pub struct ToolbarData<'a> {
    /// Distinct types of the full forest
    pub types: &'a [String],
    pub type_filter: &'a str,
    pub name_query: &'a str,
    pub show_filter: bool,
    pub summary: ForestSummary,
    /// A refetch is in flight
    pub is_loading: bool,
}

pub fn toolbar(ui: &mut Ui, data: &ToolbarData<'_>) -> Vec<AppEvent> {
    let mut events = Vec::new();

    ui.horizontal(|ui| {
        ui.heading(RichText::new("Asset Monitor").strong());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .selectable_label(data.show_filter, "Filter")
                .on_hover_text("Show filter controls")
                .clicked()
            {
                events.push(ViewEvent::ToggleFilterPanel.into());
            }

            if data.is_loading {
                ui.spinner();
            } else if ui.small_button("Refresh").clicked() {
                events.push(AppEvent::Refresh);
            }
        });
    });

    if data.show_filter {
        ui.add_space(4.0);
        filter_controls(ui, data, &mut events);
    }

    ui.add_space(8.0);
    let mut query = data.name_query.to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut query)
            .hint_text("Search by name...")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        events.push(ViewEvent::SetNameQuery(query).into());
    }

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new(data.summary.label()).small().weak());
        if data.summary.type_filtered {
            ui.label(
                RichText::new("Filtered")
                    .small()
                    .color(Color32::from_rgb(79, 70, 229)),
            );
        }
    });

    events
}

fn filter_controls(ui: &mut Ui, data: &ToolbarData<'_>, events: &mut Vec<AppEvent>) {
    ui.horizontal(|ui| {
        let selected_text = type_option_label(data.type_filter);
        egui::ComboBox::from_id_source("type_filter")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                if ui
                    .selectable_label(data.type_filter.is_empty(), "All Types")
                    .clicked()
                {
                    events.push(ViewEvent::ClearTypeFilter.into());
                }
                for asset_type in data.types {
                    if ui
                        .selectable_label(data.type_filter == asset_type.as_str(), type_option_label(asset_type))
                        .clicked()
                    {
                        events.push(ViewEvent::SetTypeFilter(asset_type.clone()).into());
                    }
                }
            });

        if !data.type_filter.is_empty()
            && ui
                .small_button("X")
                .on_hover_text("Clear filter")
                .clicked()
        {
            events.push(ViewEvent::ClearTypeFilter.into());
        }
    });

    ui.horizontal(|ui| {
        if ui.button("Expand All").clicked() {
            events.push(ViewEvent::ExpandAll.into());
        }
        if ui.button("Collapse All").clicked() {
            events.push(ViewEvent::CollapseAll.into());
        }
    });
}

fn type_option_label(asset_type: &str) -> String {
    if asset_type.is_empty() {
        "All Types".to_string()
    } else {
        format!("Type {}", asset_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_labels() {
        assert_eq!(type_option_label(""), "All Types");
        assert_eq!(type_option_label("C"), "Type C");
    }
}
