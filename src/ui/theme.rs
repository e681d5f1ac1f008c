// LogClassify - ui/theme.rs
//
// Colour scheme, phase/confidence colour mapping, and layout constants.
// No dependencies on business logic beyond read-only state types.

use crate::app::state::PipelinePhase;
use egui::Color32;

/// Colour for the pipeline phase badge.
pub fn phase_colour(phase: &PipelinePhase) -> Color32 {
    match phase {
        PipelinePhase::Idle => Color32::from_rgb(107, 114, 128),          // Gray 500
        PipelinePhase::Submitting { .. } => Color32::from_rgb(59, 130, 246), // Blue 500
        PipelinePhase::Succeeded { .. } => Color32::from_rgb(34, 197, 94), // Green 500
        PipelinePhase::Failed { .. } => Color32::from_rgb(220, 38, 38),   // Red 600
    }
}

/// Short badge text for the pipeline phase.
pub fn phase_label(phase: &PipelinePhase) -> &'static str {
    match phase {
        PipelinePhase::Idle => "IDLE",
        PipelinePhase::Submitting { .. } => "SENDING",
        PipelinePhase::Succeeded { .. } => "OK",
        PipelinePhase::Failed { .. } => "FAILED",
    }
}

/// Colour for a classifier confidence in 0.0-1.0.
pub fn confidence_colour(confidence: f64) -> Color32 {
    if confidence >= 0.8 {
        Color32::from_rgb(34, 197, 94) // Green 500
    } else if confidence >= 0.5 {
        Color32::from_rgb(217, 119, 6) // Amber 600
    } else {
        Color32::from_rgb(220, 38, 38) // Red 600
    }
}

/// Error panel colours.
pub const ERROR_TEXT: Color32 = Color32::from_rgb(248, 113, 113); // Red 400
pub const ERROR_BG: Color32 = Color32::from_rgba_premultiplied(185, 28, 28, 30);

/// Layout constants.
pub const INPUT_PANEL_HEIGHT: f32 = 260.0;
pub const LABEL_SUMMARY_WIDTH: f32 = 220.0;
pub const BUTTON_SPACING: f32 = 8.0;

/// Apply the theme and body font size to the egui context.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            font_id.size = match text_style {
                egui::TextStyle::Small => font_size * 0.8,
                egui::TextStyle::Heading => font_size * 1.4,
                _ => font_size,
            };
        }
    });
}
