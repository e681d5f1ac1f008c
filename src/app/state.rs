// LogClassify - app/state.rs
//
// Application state management. Holds the input buffer, the result store,
// the pipeline phase and status text.
// Owned by the eframe::App implementation; no egui types in here.

use crate::app::buffer::InputBuffer;
use crate::app::store::ResultStore;
use crate::core::lines::count_lines;
use crate::core::model::PipelineOutcome;
use crate::util::error::ErrorKind;
use chrono::{DateTime, Local};
use std::time::Duration;

/// Where the classification pipeline currently stands.
///
/// `Succeeded` and `Failed` describe the last finished invocation; both are
/// idle in the sense that a new trigger is accepted at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelinePhase {
    /// Nothing has been submitted yet.
    Idle,

    /// A request for `generation` is in flight.
    Submitting { generation: u64, items: usize },

    /// The latest invocation stored a new result.
    Succeeded {
        items: usize,
        elapsed: Duration,
        at: DateTime<Local>,
    },

    /// The latest invocation failed; the store was left untouched.
    Failed { kind: ErrorKind, message: String },
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Raw text being composed.
    pub buffer: InputBuffer,

    /// Most recent successful classification output.
    pub results: ResultStore,

    /// Current pipeline phase.
    pub phase: PipelinePhase,

    /// Generation of the most recently triggered invocation (0 = none yet).
    latest_generation: u64,

    /// Endpoint requests go to, for display.
    pub endpoint: String,

    /// Source identifier stamped on each item, for display.
    pub source: String,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings raised at startup (config problems).
    pub warnings: Vec<String>,

    /// Show the raw JSON even when the result can be tabulated.
    pub show_raw_json: bool,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Set by the view to ask for a classification on the next frame.
    pub request_classify: bool,

    /// Set by the view to ask for a health check on the next frame.
    pub request_health_check: bool,

    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,

    /// Body font size in points.
    pub font_size: f32,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state for the given service settings.
    pub fn new(endpoint: impl Into<String>, source: impl Into<String>, debug_mode: bool) -> Self {
        Self {
            buffer: InputBuffer::new(),
            results: ResultStore::new(),
            phase: PipelinePhase::Idle,
            latest_generation: 0,
            endpoint: endpoint.into(),
            source: source.into(),
            status_message: "Ready. Paste log lines and press Classify.".to_string(),
            warnings: Vec::new(),
            show_raw_json: false,
            show_about: false,
            request_classify: false,
            request_health_check: false,
            dark_mode: true,
            font_size: crate::util::constants::DEFAULT_FONT_SIZE,
            debug_mode,
        }
    }

    /// Record a new trigger and return its generation.
    ///
    /// Any invocation still in flight becomes stale: its outcome will be
    /// discarded by `apply_outcome`.
    pub fn begin_submission(&mut self) -> u64 {
        self.latest_generation += 1;
        let items = count_lines(self.buffer.get());

        if let PipelinePhase::Submitting { generation, .. } = self.phase {
            tracing::debug!(
                superseded = generation,
                generation = self.latest_generation,
                "New classification supersedes one in flight"
            );
        }

        self.phase = PipelinePhase::Submitting {
            generation: self.latest_generation,
            items,
        };
        self.status_message = if items == 0 {
            "Input is empty; submitting an empty batch...".to_string()
        } else {
            format!("Classifying {items} line(s)...")
        };
        self.latest_generation
    }

    /// Generation of the most recent trigger.
    pub fn latest_generation(&self) -> u64 {
        self.latest_generation
    }

    /// Whether a request for the latest generation is still outstanding.
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, PipelinePhase::Submitting { .. })
    }

    /// Apply a finished invocation.
    ///
    /// Only the latest generation may write the store or the phase; older
    /// outcomes are dropped and `false` is returned.
    pub fn apply_outcome(
        &mut self,
        generation: u64,
        items: usize,
        elapsed: Duration,
        outcome: PipelineOutcome,
    ) -> bool {
        if generation != self.latest_generation {
            tracing::debug!(
                generation,
                latest = self.latest_generation,
                success = outcome.is_success(),
                "Discarding stale classification outcome"
            );
            return false;
        }

        match outcome {
            PipelineOutcome::Succeeded(result) => {
                self.results.set(result);
                self.status_message = format!(
                    "Classified {items} line(s) in {:.2}s.",
                    elapsed.as_secs_f64()
                );
                self.phase = PipelinePhase::Succeeded {
                    items,
                    elapsed,
                    at: Local::now(),
                };
            }
            PipelineOutcome::Failed(e) => {
                let kind = e.kind();
                self.status_message = format!("Classification failed ({}).", kind.label());
                self.phase = PipelinePhase::Failed {
                    kind,
                    message: e.to_string(),
                };
            }
        }
        true
    }

    /// Record a health check result in the status bar.
    pub fn apply_health(&mut self, result: Result<serde_json::Value, String>) {
        self.status_message = match result {
            Ok(body) => match body.get("status").and_then(|s| s.as_str()) {
                Some(status) => format!("Service status: {status}"),
                None => format!("Service answered: {body}"),
            },
            Err(e) => format!("Service unreachable: {e}"),
        };
    }

    /// Clear the input buffer. The last result stays on screen.
    pub fn clear_input(&mut self) {
        self.buffer.clear();
        self.status_message = "Input cleared.".to_string();
    }
}
