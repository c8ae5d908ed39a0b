//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::traits::Filter;
use data_loader::MovieRecord;

/// Chains multiple filters together into a processing pipeline.
///
/// A record passes the pipeline when it passes every filter, so an empty
/// pipeline keeps everything.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SearchTermFilter::new("1999"))
///     .add_filter(FieldContainsFilter::genre("drama"))
///     .add_filter(RatingThresholdFilter::new(RatingFilter::GreaterThan(7.0)));
///
/// let filtered = pipeline.apply(table.records().iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the filters, in application order.
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Whether one record passes every filter.
    pub fn matches(&self, movie: &MovieRecord) -> bool {
        self.filters.iter().all(|filter| filter.matches(movie))
    }

    /// Apply all filters in sequence to the records.
    ///
    /// ## Algorithm
    /// 1. Start with the input records
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set, in input order
    pub fn apply<'a>(&self, movies: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
