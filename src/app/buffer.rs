// LogClassify - app/buffer.rs
//
// Input buffer: the raw text the operator is composing.
// No validation and no length limit; every write is visible to the next read.

use crate::util::constants::MAX_INPUT_FILE_BYTES;
use crate::util::error::{AppError, Result};
use std::path::Path;

/// Owned container for the raw, unprocessed input text.
#[derive(Debug, Default, Clone)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current buffer contents.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Replace the buffer contents.
    pub fn set(&mut self, new_text: impl Into<String>) {
        self.text = new_text.into();
    }

    /// Mutable handle for the view's text editor.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Read a text file for loading into the buffer.
///
/// Rejects files above `MAX_INPUT_FILE_BYTES`; invalid UTF-8 is replaced
/// lossily so binary junk never blocks the operator.
pub fn read_input_file(path: &Path) -> Result<String> {
    let io_err = |operation, source| AppError::Io {
        path: path.to_path_buf(),
        operation,
        source,
    };

    let size = std::fs::metadata(path)
        .map_err(|e| io_err("stat", e))?
        .len();
    if size > MAX_INPUT_FILE_BYTES {
        return Err(AppError::InputTooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_INPUT_FILE_BYTES,
        });
    }

    let bytes = std::fs::read(path).map_err(|e| io_err("read", e))?;
    tracing::debug!(file = %path.display(), bytes = bytes.len(), "Loaded input file");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
