//! Filter implementations for the query pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod field_contains;
pub mod rating_threshold;
pub mod search_term;

// Re-export for convenience
pub use field_contains::FieldContainsFilter;
pub use rating_threshold::RatingThresholdFilter;
pub use search_term::SearchTermFilter;
