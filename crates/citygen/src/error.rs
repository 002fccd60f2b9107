//! Error types for the citygen library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for citygen operations.
///
/// Row-level problems never show up here: a bad data row is skipped and
/// recorded in the [`ExtractionReport`](crate::validation::ExtractionReport).
/// Everything in this enum aborts the run before any artifact is persisted.
#[derive(Debug, Error)]
pub enum CitygenError {
    /// The input file does not exist.
    #[error("Source file not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    /// Error reading or writing a file.
    #[error("IO error for '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The header row is too narrow for the column mapping.
    #[error("Unexpected table format: header has {found} columns, at least {required} required")]
    Format { found: usize, required: usize },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid delimiter detected or specified.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// Empty input where content was required.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Failure while staging or persisting generated artifacts.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl CitygenError {
    /// Classify an error raised while opening or reading the input file.
    pub(crate) fn source_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            CitygenError::SourceNotFound { path }
        } else {
            CitygenError::Io { path, source }
        }
    }
}

/// Result type alias for citygen operations.
pub type Result<T> = std::result::Result<T, CitygenError>;
