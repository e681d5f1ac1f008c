// LogClassify - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the UI panels and drives the classification lifecycle.

use crate::app::buffer::read_input_file;
use crate::app::classify::ClassifyManager;
use crate::app::state::AppState;
use crate::core::export::{save_csv, save_json};
use crate::core::model::ClassifyProgress;
use crate::ui;
use std::path::Path;
use std::time::Duration;

/// Repaint cadence while a request is in flight, so the outcome shows promptly.
const SUBMITTING_REPAINT_MS: u64 = 100;

/// The LogClassify application.
pub struct ClassifierApp {
    pub state: AppState,
    pub classify_manager: ClassifyManager,
}

impl ClassifierApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState, classify_manager: ClassifyManager) -> Self {
        Self {
            state,
            classify_manager,
        }
    }

    /// Snapshot the buffer and start a classification for a new generation.
    fn trigger_classify(&mut self) {
        let generation = self.state.begin_submission();
        self.classify_manager
            .start(generation, self.state.buffer.get().to_owned());
    }

    fn open_input_file(&mut self, path: &Path) {
        match read_input_file(path) {
            Ok(text) => {
                let lines = crate::core::lines::count_lines(&text);
                self.state.buffer.set(text);
                self.state.status_message =
                    format!("Loaded {lines} line(s) from '{}'.", path.display());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Cannot load input file");
                self.state.status_message = format!("Cannot load file: {e}");
            }
        }
    }

    fn export_json(&mut self, dest: &Path) {
        self.state.status_message = match save_json(self.state.results.get(), dest) {
            Ok(()) => format!("Exported result to '{}'.", dest.display()),
            Err(e) => format!("JSON export failed: {e}"),
        };
    }

    fn export_csv(&mut self, dest: &Path) {
        self.state.status_message = match save_csv(self.state.results.get(), dest) {
            Ok(n) => format!("Exported {n} labelled row(s) to CSV."),
            Err(e) => format!("CSV export failed: {e}"),
        };
    }
}

impl eframe::App for ClassifierApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll for finished classifications and health checks.
        for msg in self.classify_manager.poll_progress() {
            match msg {
                ClassifyProgress::Completed {
                    generation,
                    items,
                    elapsed,
                    outcome,
                } => {
                    self.state.apply_outcome(generation, items, elapsed, outcome);
                }
                ClassifyProgress::HealthChecked { result } => {
                    self.state.apply_health(result);
                }
            }
        }
        if self.state.is_submitting() {
            ctx.request_repaint_after(Duration::from_millis(SUBMITTING_REPAINT_MS));
        }

        // Ctrl+Enter (Cmd+Enter on macOS) classifies from anywhere.
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter)) {
            self.state.request_classify = true;
        }

        // ---- Handle flags set by panels ----
        if self.state.request_classify {
            self.state.request_classify = false;
            self.trigger_classify();
        }
        if self.state.request_health_check {
            self.state.request_health_check = false;
            self.state.status_message = "Checking service health...".to_string();
            self.classify_manager.start_health_check();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Log File\u{2026}").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Log files", &["log", "txt"])
                            .pick_file()
                        {
                            self.open_input_file(&path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    let has_result = !self.state.results.is_empty();
                    ui.add_enabled_ui(has_result, |ui| {
                        if ui.button("Export Results (JSON)\u{2026}").clicked() {
                            if let Some(dest) = rfd::FileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name("classification.json")
                                .save_file()
                            {
                                self.export_json(&dest);
                            }
                            ui.close_menu();
                        }
                        if ui.button("Export Labels (CSV)\u{2026}").clicked() {
                            if let Some(dest) = rfd::FileDialog::new()
                                .add_filter("CSV", &["csv"])
                                .set_file_name("classification.csv")
                                .save_file()
                            {
                                self.export_csv(&dest);
                            }
                            ui.close_menu();
                        }
                        if ui.button("Copy Results").clicked() {
                            ctx.copy_text(self.state.results.pretty());
                            self.state.status_message =
                                "Copied result JSON to clipboard.".to_string();
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.state.show_raw_json, "Raw JSON");
                    if ui.checkbox(&mut self.state.dark_mode, "Dark mode").changed() {
                        ui::theme::apply(ctx, self.state.dark_mode, self.state.font_size);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(&self.state.endpoint).small().weak());
                    if !self.state.warnings.is_empty() {
                        let n = self.state.warnings.len();
                        if ui
                            .small_button(format!("{n} warning(s)"))
                            .on_hover_text("Show startup warnings")
                            .clicked()
                        {
                            self.state.show_about = true;
                        }
                    }
                });
            });
        });

        // Input panel (top half)
        egui::TopBottomPanel::top("input_panel")
            .resizable(true)
            .default_height(ui::theme::INPUT_PANEL_HEIGHT)
            .show(ctx, |ui| {
                ui::panels::input::render(ui, &mut self.state);
            });

        // Central panel (results)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::results::render(ui, &mut self.state);
        });

        ui::panels::about::render(ctx, &mut self.state);
    }
}
