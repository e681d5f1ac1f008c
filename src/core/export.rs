// LogClassify - core/export.rs
//
// JSON and CSV export of the current classification result.
// The encoders write to any Write trait object; `save_json` and `save_csv`
// decide whether the stored result is exportable and create the file.

use crate::core::model::{ClassificationResult, LabelledResult};
use crate::core::results::interpret;
use crate::util::error::ExportError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// The stored result, or `NoResult` when nothing has been classified yet.
pub fn require_result(
    result: Option<&ClassificationResult>,
) -> Result<&ClassificationResult, ExportError> {
    result.ok_or(ExportError::NoResult)
}

/// Labelled rows of the stored result, for CSV.
///
/// `NotLabelled` when the result is not an array of labelled entries.
pub fn labelled_rows(
    result: Option<&ClassificationResult>,
) -> Result<Vec<LabelledResult>, ExportError> {
    interpret(require_result(result)?).ok_or(ExportError::NotLabelled)
}

/// Write the stored result to `dest` as pretty JSON.
pub fn save_json(result: Option<&ClassificationResult>, dest: &Path) -> Result<(), ExportError> {
    let result = require_result(result)?;
    let file = create(dest)?;
    export_json(result, file, dest)?;
    tracing::info!(file = %dest.display(), "Exported result JSON");
    Ok(())
}

/// Write the stored result's labelled rows to `dest` as CSV.
///
/// The file is only created once the result is known to be labelled.
pub fn save_csv(result: Option<&ClassificationResult>, dest: &Path) -> Result<usize, ExportError> {
    let rows = labelled_rows(result)?;
    let file = create(dest)?;
    let count = export_csv(&rows, file, dest)?;
    tracing::info!(file = %dest.display(), rows = count, "Exported labelled CSV");
    Ok(count)
}

fn create(dest: &Path) -> Result<File, ExportError> {
    File::create(dest).map_err(|e| ExportError::Io {
        path: dest.to_path_buf(),
        source: e,
    })
}

/// Export labelled rows to CSV.
///
/// Writes: label_id, label, source, confidence. Returns the row count.
pub fn export_csv<W: Write>(
    rows: &[LabelledResult],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_err = |e| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(["label_id", "label", "source", "confidence"])
        .map_err(csv_err)?;

    for row in rows {
        csv_writer
            .write_record([
                row.label_id.as_str(),
                row.label.as_str(),
                row.source.as_str(),
                &format!("{:.4}", row.confidence),
            ])
            .map_err(csv_err)?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(rows.len())
}

/// Export the raw result as pretty-printed JSON, exactly as received.
pub fn export_json<W: Write>(
    result: &ClassificationResult,
    writer: W,
    export_path: &Path,
) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, result).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })
}
