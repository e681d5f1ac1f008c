// LogClassify - app/headless.rs
//
// One-shot classification for `--headless`: read the input, run the
// pipeline once on the calling thread, and emit the result as JSON.

use crate::app::buffer::read_input_file;
use crate::app::classify::ClassifyManager;
use crate::core::export::save_json;
use crate::core::model::{ClassificationResult, PipelineOutcome};
use crate::util::error::{AppError, Result};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Read the input text from `input`, or from `stdin` when no file is given.
pub fn read_input<R: Read>(input: Option<&Path>, mut stdin: R) -> Result<String> {
    match input {
        Some(path) => read_input_file(path),
        None => {
            let mut text = String::new();
            stdin.read_to_string(&mut text).map_err(|e| AppError::Io {
                path: PathBuf::from("<stdin>"),
                operation: "read",
                source: e,
            })?;
            Ok(text)
        }
    }
}

/// Classify `raw_text` once, blocking until the exchange finishes.
///
/// A failed exchange comes back as `AppError::Classify`.
pub fn classify_once(manager: &ClassifyManager, raw_text: &str) -> Result<ClassificationResult> {
    let run = manager.run_blocking(raw_text);
    match run.outcome {
        PipelineOutcome::Succeeded(result) => {
            tracing::info!(items = run.items, "Headless classification complete");
            Ok(result)
        }
        PipelineOutcome::Failed(e) => Err(e.into()),
    }
}

/// Emit `result` as pretty JSON, to `output` if given or else to `stdout`.
pub fn write_result<W: Write>(
    result: &ClassificationResult,
    output: Option<&Path>,
    mut stdout: W,
) -> Result<()> {
    if let Some(dest) = output {
        save_json(Some(result), dest)?;
        return Ok(());
    }

    let pretty = serde_json::to_string_pretty(result).unwrap_or_else(|_| result.to_string());
    writeln!(stdout, "{pretty}").map_err(|e| AppError::Io {
        path: PathBuf::from("<stdout>"),
        operation: "write",
        source: e,
    })
}
