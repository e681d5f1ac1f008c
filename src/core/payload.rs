// LogClassify - core/payload.rs
//
// Request payload construction. Pure and deterministic: one request item
// per line, same order, every item tagged with the same source.

use crate::core::model::{ClassificationBatch, ClassificationRequestItem, LogLine};

/// Build the batch for `lines`, stamping each item with `source`.
///
/// An empty slice yields an empty batch; callers still submit it.
pub fn build_payload(lines: &[LogLine], source: &str) -> ClassificationBatch {
    lines
        .iter()
        .map(|line| ClassificationRequestItem {
            source: source.to_owned(),
            log_message: line.clone(),
        })
        .collect()
}
