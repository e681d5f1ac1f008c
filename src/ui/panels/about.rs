// LogClassify - ui/panels/about.rs
//
// About dialog: shown from the Help menu.
// Rendered as a centred, non-resizable, non-collapsible window.

use crate::app::state::AppState;
use crate::util::constants::{APP_NAME, APP_VERSION};

/// Render the About dialog (if `state.show_about` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new(format!("About {APP_NAME}"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(APP_NAME).size(28.0).strong());
                ui.add_space(4.0);
                ui.label(egui::RichText::new(format!("v{APP_VERSION}")).size(14.0).weak());
            });

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label("Paste ad-hoc log samples and classify them");
                ui.label("against a remote classification service.");
            });

            ui.add_space(10.0);

            egui::Grid::new("about_service")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Endpoint:");
                    ui.label(egui::RichText::new(&state.endpoint).monospace());
                    ui.end_row();

                    ui.label("Source:");
                    ui.label(egui::RichText::new(&state.source).monospace());
                    ui.end_row();

                    ui.label("Debug logging:");
                    ui.label(if state.debug_mode { "on" } else { "off" });
                    ui.end_row();
                });

            if !state.warnings.is_empty() {
                ui.add_space(8.0);
                ui.separator();
                ui.label(egui::RichText::new("Startup warnings").strong());
                for warning in &state.warnings {
                    ui.label(egui::RichText::new(warning).small());
                }
            }

            ui.add_space(8.0);
            ui.separator();
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("MIT License").small().weak());
                ui.label(egui::RichText::new("Built with Rust & egui").small().weak());
            });

            ui.add_space(8.0);
        });

    if !open {
        state.show_about = false;
    }
}
