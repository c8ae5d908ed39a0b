//! Error types for the data-loader crate.
//!
//! Only ingestion can fail. Malformed cell values are never errors: they are
//! resolved by the normalizer (see [`crate::normalize`]).

use thiserror::Error;

/// Errors that can occur while loading a movie table.
///
/// Any of these means no table was produced. A partially loaded table is
/// never returned.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader rejected the input
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// The file has no header row
    #[error("No header row found in {path}")]
    EmptyFile { path: String },

    /// A column the engine cannot work without is missing from the header
    #[error("Missing required column '{column}' in {path}")]
    MissingColumn { column: String, path: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
