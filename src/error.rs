use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Everything that can go wrong between reading the inputs and writing the
/// map. All variants are fatal: the caller propagates them to `main`, which
/// reports and exits nonzero. Malformed rows are never skipped.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("{}: required column '{column}' not found in header", file.display())]
    MissingColumn { file: PathBuf, column: String },

    #[error("{}, row {row}: '{value}' in column '{column}' is not a number", file.display())]
    ValueParse {
        file: PathBuf,
        /// 1-based data-row number (header excluded).
        row: usize,
        column: String,
        value: String,
    },

    #[error("{}, feature {index}: missing numeric property '{property}'", file.display())]
    MissingProperty {
        file: PathBuf,
        index: usize,
        property: String,
    },

    #[error("{}: {reason}", file.display())]
    Malformed { file: PathBuf, reason: String },

    #[error("{}: file not found", file.display())]
    FileNotFound { file: PathBuf },

    #[error("reading {}", file.display())]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: not valid JSON", file.display())]
    Json {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("writing map to {}", file.display())]
    RenderExport {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MapError {
    /// Wrap an I/O failure, keeping "file not found" as its own variant so
    /// the diagnostic stays short for the common case.
    pub fn from_io(file: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            MapError::FileNotFound { file: file.to_path_buf() }
        } else {
            MapError::Io { file: file.to_path_buf(), source }
        }
    }
}
