//! Top-N projection for chart-style output.

use crate::ranking::{SortKey, sort_movies};
use data_loader::MovieRecord;
use serde::Serialize;

/// One bar of a "top by rating" chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingPoint {
    pub label: String,
    pub value: f64,
}

/// The `n` best-rated movies as `(name, rating)` points, highest first.
///
/// Movies are always re-ranked by rating here, whatever order the caller
/// sorted them in. `n == 0` gives an empty series.
pub fn top_n(movies: &[&MovieRecord], n: usize) -> Vec<RatingPoint> {
    if n == 0 {
        return Vec::new();
    }

    sort_movies(movies, SortKey::Rating)
        .into_iter()
        .take(n)
        .map(|movie| RatingPoint {
            label: movie.name.clone(),
            value: movie.normalized_rating(),
        })
        .collect()
}
