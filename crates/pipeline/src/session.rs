//! A query session over one loaded table.
//!
//! Ties the stages together: filter, then optionally sort, then (on request)
//! project the top rated movies or render table rows.

use crate::criteria::FilterCriteria;
use crate::error::Result;
use crate::presentation;
use crate::projection::{self, RatingPoint};
use crate::query::filter_movies;
use crate::ranking::{self, SortKey};
use data_loader::{MovieRecord, MovieTable};
use serde::Serialize;
use std::sync::Arc;

/// Matched movies for one query, borrowed from the session's table.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult<'a> {
    pub criteria: FilterCriteria,
    /// The key actually applied; `None` when no sort or an unknown one was requested
    pub sort_key: Option<SortKey>,
    pub movies: Vec<&'a MovieRecord>,
}

impl SearchResult<'_> {
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// The `n` best-rated matches, regardless of `sort_key`.
    pub fn top_rated(&self, n: usize) -> Vec<RatingPoint> {
        projection::top_n(&self.movies, n)
    }
}

/// Runs queries against a shared, read-only table.
#[derive(Debug, Clone)]
pub struct SearchSession {
    table: Arc<MovieTable>,
}

impl SearchSession {
    pub fn new(table: Arc<MovieTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &MovieTable {
        &self.table
    }

    /// Filter the table, then sort by `sort_by` if given.
    ///
    /// An empty or unknown `sort_by` keeps table order.
    ///
    /// # Errors
    /// `QueryError::InvalidRatingFilter`; nothing is filtered in that case.
    pub fn search(&self, criteria: &FilterCriteria, sort_by: Option<&str>) -> Result<SearchResult<'_>> {
        let mut movies = filter_movies(self.table.records(), criteria)?;

        let sort_key = sort_by.and_then(SortKey::from_name);
        if let Some(name) = sort_by.filter(|name| !name.trim().is_empty()) {
            movies = ranking::sort_movies_by_name(&movies, name);
        }

        Ok(SearchResult {
            criteria: criteria.clone(),
            sort_key,
            movies,
        })
    }

    /// Display rows for a result, with `N/A` for columns the source lacked.
    pub fn rows(&self, result: &SearchResult<'_>) -> Vec<Vec<String>> {
        presentation::table_rows(&self.table, &result.movies)
    }
}
