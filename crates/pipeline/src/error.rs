//! Error types for query evaluation.

use thiserror::Error;

/// Query-level failures.
///
/// A query that fails here is rejected as a whole before any record is
/// evaluated. This is distinct from a query that ran and matched nothing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// The rating filter could not be parsed
    #[error("Invalid rating filter '{expression}': {reason}. Use '<' or '>' followed by a number.")]
    InvalidRatingFilter { expression: String, reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, QueryError>;
