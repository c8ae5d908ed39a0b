//! Filter for the free-text search term.
//!
//! The term may name a movie or state a year, so a record is admitted when
//! either reading matches.

use crate::traits::Filter;
use data_loader::{MovieRecord, normalize_year};

/// Keeps records whose name contains the term or whose year equals it.
///
/// ## Algorithm
/// For each record:
/// 1. Normalize the record's year and compare it with the normalized term
/// 2. Check whether the lowercased name contains the lowercased term
/// 3. Keep the record if either holds
///
/// A term that is not a year normalizes to `"0"`, which is also the year of
/// every record with a malformed year. Such records therefore match any
/// non-year term.
pub struct SearchTermFilter {
    term: String,
    year: String,
}

impl SearchTermFilter {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_lowercase(),
            year: normalize_year(term),
        }
    }
}

impl Filter for SearchTermFilter {
    fn name(&self) -> &str {
        "SearchTermFilter"
    }

    fn matches(&self, movie: &MovieRecord) -> bool {
        movie.normalized_year() == self.year || movie.name.to_lowercase().contains(&self.term)
    }
}
