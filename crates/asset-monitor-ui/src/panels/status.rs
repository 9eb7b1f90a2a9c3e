//! Full-screen loading and error states

use egui::{Color32, RichText, Ui};

pub fn loading_screen(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.spinner();
        ui.add_space(8.0);
        ui.label(RichText::new("Loading assets...").weak());
    });
}

/// Returns true when "Try Again" was clicked.
pub fn error_screen(ui: &mut Ui, message: &str) -> bool {
    let mut retry = false;

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        egui::Frame::none()
            .fill(Color32::from_rgb(254, 242, 242))
            .stroke(egui::Stroke::new(1.0, Color32::from_rgb(254, 202, 202)))
            .rounding(8.0)
            .inner_margin(24.0)
            .show(ui, |ui| {
                ui.set_max_width(420.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("Error Loading Assets")
                            .size(18.0)
                            .color(Color32::from_rgb(153, 27, 27)),
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(message).color(Color32::from_rgb(220, 38, 38)));
                    ui.add_space(12.0);
                    retry = ui.button("Try Again").clicked();
                });
            });
    });

    retry
}
