//! Ranking of query results.
//!
//! Sorting never reorders the caller's slice. Each function returns a new
//! vector of borrowed records, highest first. Sorts are stable, so records
//! with equal keys keep their input order.

use data_loader::MovieRecord;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Which normalized field drives the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Rating,
    Votes,
    Year,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Rating, SortKey::Votes, SortKey::Year];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Rating => "rating",
            SortKey::Votes => "votes",
            SortKey::Year => "year",
        }
    }

    /// Resolve a key name, ignoring case and surrounding whitespace.
    ///
    /// Unknown names give `None`; that is not an error.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable descending sort on an extracted key.
fn descending_by<'a, K>(
    movies: &[&'a MovieRecord],
    key: impl Fn(&MovieRecord) -> K,
    compare: impl Fn(&K, &K) -> Ordering,
) -> Vec<&'a MovieRecord> {
    let mut keyed: Vec<(K, &'a MovieRecord)> =
        movies.iter().map(|&movie| (key(movie), movie)).collect();
    keyed.sort_by(|a, b| compare(&b.0, &a.0));
    keyed.into_iter().map(|(_, movie)| movie).collect()
}

/// Sort movies by `key`, highest first.
///
/// - `Rating`: normalized rating
/// - `Votes`: normalized vote count
/// - `Year`: normalized year string. Years are four digits or `"0"`, so the
///   string order is the numeric order.
pub fn sort_movies<'a>(movies: &[&'a MovieRecord], key: SortKey) -> Vec<&'a MovieRecord> {
    match key {
        SortKey::Rating => descending_by(movies, MovieRecord::normalized_rating, |a: &f64, b: &f64| {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }),
        SortKey::Votes => descending_by(movies, MovieRecord::normalized_votes, Ord::cmp),
        SortKey::Year => descending_by(movies, MovieRecord::normalized_year, Ord::cmp),
    }
}

/// Sort by a key given by name. An unknown name keeps the input order.
pub fn sort_movies_by_name<'a>(movies: &[&'a MovieRecord], name: &str) -> Vec<&'a MovieRecord> {
    match SortKey::from_name(name) {
        Some(key) => sort_movies(movies, key),
        None => {
            tracing::debug!("Unknown sort key '{}', keeping input order", name);
            movies.to_vec()
        }
    }
}
