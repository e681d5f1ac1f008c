// LogClassify - app/store.rs
//
// Result store: the most recent classification output.
// `set` overwrites unconditionally; there is no merge and no history.

use crate::core::model::ClassificationResult;

/// Text shown when nothing has been classified yet.
const EMPTY_RENDERING: &str = "[]";

/// Holds at most one classification result.
#[derive(Debug, Default, Clone)]
pub struct ResultStore {
    current: Option<ClassificationResult>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored result, or `None` before the first success.
    pub fn get(&self) -> Option<&ClassificationResult> {
        self.current.as_ref()
    }

    /// Replace the stored result.
    pub fn set(&mut self, result: ClassificationResult) {
        self.current = Some(result);
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Pretty-printed JSON for display; `[]` when empty.
    pub fn pretty(&self) -> String {
        match &self.current {
            Some(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            None => EMPTY_RENDERING.to_string(),
        }
    }
}
