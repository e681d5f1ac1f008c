// LogClassify - ui/panels/results.rs
//
// Results panel: phase badge, failure message, and the stored result,
// either as a labelled table or as pretty-printed JSON.

use crate::app::state::{AppState, PipelinePhase};
use crate::core::model::LabelledResult;
use crate::core::results::{interpret, label_counts};
use crate::ui::theme;

/// Render the results panel (central panel).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading("Results");
        ui.label(
            egui::RichText::new(format!(" {} ", theme::phase_label(&state.phase)))
                .strong()
                .color(theme::phase_colour(&state.phase)),
        );
        if let PipelinePhase::Succeeded { items, at, .. } = &state.phase {
            ui.label(
                egui::RichText::new(format!("{items} line(s) at {}", at.format("%H:%M:%S")))
                    .small()
                    .weak(),
            );
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(!state.results.is_empty(), egui::Button::new("Copy"))
                .on_hover_text("Copy the result JSON to the clipboard")
                .clicked()
            {
                ui.ctx().copy_text(state.results.pretty());
                state.status_message = "Copied result JSON to clipboard.".to_string();
            }
            ui.checkbox(&mut state.show_raw_json, "Raw JSON");
        });
    });

    if let PipelinePhase::Failed { kind, message } = &state.phase {
        egui::Frame::new()
            .fill(theme::ERROR_BG)
            .inner_margin(6.0)
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(format!("{} error", kind.label()))
                        .strong()
                        .color(theme::ERROR_TEXT),
                );
                ui.label(egui::RichText::new(message).color(theme::ERROR_TEXT));
                if !state.results.is_empty() {
                    ui.label(egui::RichText::new("Showing the previous result.").small().weak());
                }
            });
    }

    ui.separator();

    let rows = if state.show_raw_json {
        None
    } else {
        state.results.get().and_then(interpret)
    };

    match rows {
        Some(rows) if !rows.is_empty() => render_table(ui, &rows),
        _ => render_json(ui, state),
    }
}

fn render_json(ui: &mut egui::Ui, state: &AppState) {
    let pretty = state.results.pretty();
    egui::ScrollArea::both()
        .id_salt("results_json")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut pretty.as_str())
                    .code_editor()
                    .desired_width(f32::INFINITY),
            );
        });
}

fn render_table(ui: &mut egui::Ui, rows: &[LabelledResult]) {
    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.set_width(theme::LABEL_SUMMARY_WIDTH);
            ui.label(egui::RichText::new("By label").strong());
            egui::Grid::new("label_counts")
                .num_columns(3)
                .striped(true)
                .show(ui, |ui| {
                    for count in label_counts(rows) {
                        ui.label(&count.label);
                        ui.label(count.count.to_string());
                        ui.label(
                            egui::RichText::new(format!("{:.2}", count.mean_confidence))
                                .color(theme::confidence_colour(count.mean_confidence)),
                        );
                        ui.end_row();
                    }
                });
        });

        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("results_table")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                egui::Grid::new("results_grid")
                    .num_columns(5)
                    .striped(true)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        for header in ["#", "Label", "Label ID", "Source", "Confidence"] {
                            ui.label(egui::RichText::new(header).strong());
                        }
                        ui.end_row();

                        for (i, row) in rows.iter().enumerate() {
                            ui.label((i + 1).to_string());
                            ui.label(&row.label);
                            ui.label(egui::RichText::new(&row.label_id).monospace());
                            ui.label(&row.source);
                            ui.label(
                                egui::RichText::new(format!("{:.3}", row.confidence))
                                    .color(theme::confidence_colour(row.confidence)),
                            );
                            ui.end_row();
                        }
                    });
            });
    });
}
