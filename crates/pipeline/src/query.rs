//! Compiled queries.
//!
//! [`MovieQuery::new`] turns [`FilterCriteria`] into a [`FilterPipeline`].
//! It is the only step that can fail, and it fails before any record is
//! looked at.

use crate::criteria::{FilterCriteria, RatingFilter};
use crate::error::Result;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{FieldContainsFilter, RatingThresholdFilter, SearchTermFilter};
use data_loader::MovieRecord;

/// A validated query, ready to run against any number of records.
///
/// A record is eligible when
/// `(year matches OR name matches) AND genre matches AND director matches`,
/// and, if a rating filter was given, its normalized rating passes the
/// comparison. Absent criteria add no filter.
pub struct MovieQuery {
    rating_filter: Option<RatingFilter>,
    pipeline: FilterPipeline,
}

impl MovieQuery {
    /// Compile criteria into a query.
    ///
    /// # Errors
    /// `QueryError::InvalidRatingFilter` if the rating filter cannot be parsed.
    pub fn new(criteria: &FilterCriteria) -> Result<Self> {
        let rating_filter = criteria
            .rating_filter()
            .map(str::parse::<RatingFilter>)
            .transpose()?;

        let mut pipeline = FilterPipeline::new();
        if let Some(term) = criteria.search_term() {
            pipeline = pipeline.add_filter(SearchTermFilter::new(term));
        }
        if let Some(genre) = criteria.genre_filter() {
            pipeline = pipeline.add_filter(FieldContainsFilter::genre(genre));
        }
        if let Some(director) = criteria.director_filter() {
            pipeline = pipeline.add_filter(FieldContainsFilter::director(director));
        }
        if let Some(comparison) = rating_filter {
            pipeline = pipeline.add_filter(RatingThresholdFilter::new(comparison));
        }

        Ok(Self {
            rating_filter,
            pipeline,
        })
    }

    pub fn rating_filter(&self) -> Option<RatingFilter> {
        self.rating_filter
    }

    /// Whether a single record is eligible.
    pub fn matches(&self, movie: &MovieRecord) -> bool {
        self.pipeline.matches(movie)
    }

    /// Eligible records, in input order. The input is left untouched.
    pub fn run<'a>(&self, movies: &'a [MovieRecord]) -> Vec<&'a MovieRecord> {
        self.pipeline.apply(movies.iter().collect())
    }
}

/// Compile `criteria` and run it over `movies`.
///
/// An invalid rating filter is reported as an error; it never yields a
/// partially filtered result.
pub fn filter_movies<'a>(
    movies: &'a [MovieRecord],
    criteria: &FilterCriteria,
) -> Result<Vec<&'a MovieRecord>> {
    let query = MovieQuery::new(criteria).inspect_err(|e| tracing::warn!("Query rejected: {}", e))?;

    let matched = query.run(movies);
    tracing::debug!("Query matched {} of {} movies", matched.len(), movies.len());

    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;
    use data_loader::Field;

    fn movies() -> Vec<MovieRecord> {
        vec![
            MovieRecord::new("A")
                .with(Field::Year, "1999")
                .with(Field::Genre, "Drama")
                .with(Field::Director, "X")
                .with(Field::Rating, "8.1"),
            MovieRecord::new("B")
                .with(Field::Year, "2001")
                .with(Field::Genre, "Comedy")
                .with(Field::Director, "Y")
                .with(Field::Rating, "6.5"),
        ]
    }

    fn names(movies: &[&MovieRecord]) -> Vec<String> {
        movies.iter().map(|movie| movie.name.clone()).collect()
    }

    #[test]
    fn test_rating_filter_only() {
        let movies = movies();
        let criteria = FilterCriteria::new().search("").rating(">7").genre("").director("");

        let result = filter_movies(&movies, &criteria).unwrap();
        assert_eq!(names(&result), vec!["A"]);
    }

    #[test]
    fn test_search_by_year() {
        let movies = movies();
        let criteria = FilterCriteria::new().search("1999");

        let result = filter_movies(&movies, &criteria).unwrap();
        assert_eq!(names(&result), vec!["A"]);
    }

    #[test]
    fn test_invalid_rating_filter_fails_whole_query() {
        let movies = movies();
        let criteria = FilterCriteria::new().rating("garbage").genre("drama");

        let err = filter_movies(&movies, &criteria).unwrap_err();
        assert!(matches!(err, QueryError::InvalidRatingFilter { .. }));
        assert!(MovieQuery::new(&criteria).is_err());
    }

    #[test]
    fn test_no_criteria_keeps_everything_in_order() {
        let movies = movies();

        let result = filter_movies(&movies, &FilterCriteria::new()).unwrap();
        assert_eq!(names(&result), vec!["A", "B"]);
    }

    #[test]
    fn test_genre_and_director_combine() {
        let movies = movies();

        let query = MovieQuery::new(&FilterCriteria::new().genre("comedy").director("y")).unwrap();
        assert!(!query.matches(&movies[0]));
        assert!(query.matches(&movies[1]));

        let query = MovieQuery::new(&FilterCriteria::new().genre("comedy").director("x")).unwrap();
        assert!(query.run(&movies).is_empty());
    }

    #[test]
    fn test_rating_filter_is_parsed_once() {
        let query = MovieQuery::new(&FilterCriteria::new().rating("<7")).unwrap();
        assert_eq!(query.rating_filter(), Some(RatingFilter::LessThan(7.0)));

        let query = MovieQuery::new(&FilterCriteria::new()).unwrap();
        assert_eq!(query.rating_filter(), None);
    }
}
