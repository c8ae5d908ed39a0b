//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a record set.

use data_loader::MovieRecord;

/// Core trait for filtering movie records.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Filters are built once per query, so anything that can fail (parsing a
///   threshold, say) happens before a filter exists. `matches` cannot fail.
/// - `apply` borrows records rather than copying them; the caller's record
///   set is never reordered or modified.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Decide whether a single record passes this filter.
    fn matches(&self, movie: &MovieRecord) -> bool;

    /// Keep the records that pass, preserving their order.
    fn apply<'a>(&self, movies: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        movies
            .into_iter()
            .filter(|movie| self.matches(movie))
            .collect()
    }
}
