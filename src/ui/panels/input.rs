// LogClassify - ui/panels/input.rs
//
// Input panel: the paste area plus the Classify / Clear / Check Service
// controls. Buttons only set request flags; the app loop acts on them.

use crate::app::state::AppState;
use crate::core::lines::count_lines;
use crate::ui::theme;
use crate::util::constants::{INPUT_HINT, INPUT_ROWS};

/// Render the input panel.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading("Log Input");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!("source: {}", state.source))
                    .small()
                    .weak(),
            );
        });
    });
    ui.add_space(4.0);

    let available = ui.available_height() - 40.0;
    egui::ScrollArea::vertical()
        .id_salt("input_scroll")
        .max_height(available.max(80.0))
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(state.buffer.text_mut())
                    .hint_text(INPUT_HINT)
                    .desired_rows(INPUT_ROWS)
                    .desired_width(f32::INFINITY)
                    .code_editor(),
            );
        });

    ui.add_space(theme::BUTTON_SPACING);

    ui.horizontal(|ui| {
        let lines = count_lines(state.buffer.get());

        let classify = ui
            .button(egui::RichText::new("Classify Logs").strong())
            .on_hover_text("Send every non-empty line to the classification service (Ctrl+Enter)");
        if classify.clicked() {
            state.request_classify = true;
        }

        ui.add_enabled_ui(!state.buffer.is_empty(), |ui| {
            if ui.button("Clear").clicked() {
                state.clear_input();
            }
        });

        if ui
            .button("Check Service")
            .on_hover_text(format!("Query the health endpoint of {}", state.endpoint))
            .clicked()
        {
            state.request_health_check = true;
        }

        ui.separator();
        let summary = match lines {
            0 => "No lines: an empty batch will be sent".to_string(),
            1 => "1 line".to_string(),
            n => format!("{n} lines"),
        };
        ui.label(egui::RichText::new(summary).weak());

        if state.is_submitting() {
            ui.spinner();
        }
    });
}
