//! Query pipeline for movie tables.
//!
//! This crate provides:
//! - Filter trait and implementations for record filtering
//! - FilterPipeline for composing filters
//! - MovieQuery for compiling caller criteria into a pipeline
//! - Ranking, top-N projection and table rows for presentation
//!
//! ## Architecture
//! A query processes records in stages:
//! 1. Criteria are compiled once; an invalid rating filter fails here
//! 2. Filters keep the eligible records (search term, genre, director, rating)
//! 3. The ranking step optionally sorts by rating, votes or year
//! 4. The projection step takes the top N by rating for charts
//!
//! Every stage borrows from the table and returns a fresh vector.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterCriteria, SearchSession};
//! use std::sync::Arc;
//!
//! let session = SearchSession::new(Arc::new(table));
//! let criteria = FilterCriteria::new().search("1999").rating(">7").genre("drama");
//!
//! let result = session.search(&criteria, Some("votes"))?;
//! for row in session.rows(&result) {
//!     println!("{}", row.join(" | "));
//! }
//! let chart = result.top_rated(10);
//! ```

pub mod error;
pub mod criteria;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod query;
pub mod ranking;
pub mod projection;
pub mod presentation;
pub mod session;

// Re-export main types
pub use criteria::{FilterCriteria, RatingFilter};
pub use error::{QueryError, Result};
pub use filter_pipeline::FilterPipeline;
pub use projection::{RatingPoint, top_n};
pub use query::{MovieQuery, filter_movies};
pub use ranking::{SortKey, sort_movies, sort_movies_by_name};
pub use session::{SearchResult, SearchSession};
pub use traits::Filter;
