// LogClassify - core/results.rs
//
// Read-only interpretation of a classification result for display.
// The stored JSON is never modified; this only decides whether it can be
// shown as a labelled table and computes per-label tallies.

use crate::core::model::{ClassificationResult, LabelledResult};
use std::collections::HashMap;

/// Interpret `result` as a list of labelled entries.
///
/// Returns `None` unless `result` is a JSON array whose every element has
/// the labelled shape. An empty array interprets as an empty list.
pub fn interpret(result: &ClassificationResult) -> Option<Vec<LabelledResult>> {
    let items = result.as_array()?;
    items
        .iter()
        .map(|item| serde_json::from_value::<LabelledResult>(item.clone()).ok())
        .collect()
}

/// Tally of one label across a result.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
    pub mean_confidence: f64,
}

/// Count entries per label, most frequent first, ties broken by label name.
pub fn label_counts(results: &[LabelledResult]) -> Vec<LabelCount> {
    let mut acc: HashMap<&str, (usize, f64)> = HashMap::new();
    for r in results {
        let slot = acc.entry(r.label.as_str()).or_insert((0, 0.0));
        slot.0 += 1;
        slot.1 += r.confidence;
    }

    let mut counts: Vec<LabelCount> = acc
        .into_iter()
        .map(|(label, (count, total))| LabelCount {
            label: label.to_string(),
            count,
            mean_confidence: total / count as f64,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    counts
}
