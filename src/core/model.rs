// LogClassify - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::error::ClassifyError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// =============================================================================
// Request side
// =============================================================================

/// One non-empty line extracted from the input buffer, verbatim.
pub type LogLine = String;

/// The per-line unit sent to the classification service.
///
/// Field names are the wire names; the service decodes exactly these keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRequestItem {
    /// Source identifier, constant across one batch.
    pub source: String,

    /// One log line, unmodified.
    pub log_message: String,
}

/// Ordered request items for one submission; serialises as a JSON array.
pub type ClassificationBatch = Vec<ClassificationRequestItem>;

// =============================================================================
// Response side
// =============================================================================

/// Whatever JSON the service returned, stored verbatim.
pub type ClassificationResult = serde_json::Value;

/// Display-only interpretation of one element of a result array.
///
/// Matches the record the classification service emits per line. A result
/// is only interpreted this way when every element fits; otherwise the raw
/// JSON is shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelledResult {
    pub label_id: String,
    pub label: String,
    pub source: String,
    pub confidence: f64,
}

// =============================================================================
// Pipeline outcome
// =============================================================================

/// Terminal state of one classification invocation.
#[derive(Debug)]
pub enum PipelineOutcome {
    /// The service answered with valid JSON.
    Succeeded(ClassificationResult),

    /// The exchange failed; the result store must stay untouched.
    Failed(ClassifyError),
}

impl PipelineOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }
}

// =============================================================================
// Background → UI messages
// =============================================================================

/// Messages sent from the classification runtime to the UI thread.
#[derive(Debug)]
pub enum ClassifyProgress {
    /// One classification invocation finished.
    Completed {
        /// Generation taken when the invocation was triggered.
        generation: u64,
        /// Number of request items that were submitted.
        items: usize,
        /// Wall time from trigger to outcome.
        elapsed: Duration,
        outcome: PipelineOutcome,
    },

    /// A health check finished. Carries the service's answer or the error text.
    HealthChecked {
        result: std::result::Result<serde_json::Value, String>,
    },
}
