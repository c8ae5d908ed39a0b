//! Filter on the normalized rating.

use crate::criteria::RatingFilter;
use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps records whose normalized rating passes a parsed comparison.
///
/// Blank or malformed ratings normalize to `0.0` and are compared as such.
pub struct RatingThresholdFilter {
    comparison: RatingFilter,
}

impl RatingThresholdFilter {
    pub fn new(comparison: RatingFilter) -> Self {
        Self { comparison }
    }
}

impl Filter for RatingThresholdFilter {
    fn name(&self) -> &str {
        "RatingThresholdFilter"
    }

    fn matches(&self, movie: &MovieRecord) -> bool {
        self.comparison.accepts(movie.normalized_rating())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Field;

    #[test]
    fn test_rating_threshold_filter() {
        let movies = vec![
            MovieRecord::new("High").with(Field::Rating, "8.1"),
            MovieRecord::new("Low").with(Field::Rating, "6.5"),
            MovieRecord::new("Unrated"),
        ];

        let above = RatingThresholdFilter::new(RatingFilter::GreaterThan(7.0));
        let kept = above.apply(movies.iter().collect());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "High");

        // Unrated movies count as 0.0
        let below = RatingThresholdFilter::new(RatingFilter::LessThan(7.0));
        let kept = below.apply(movies.iter().collect());
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[1].name, "Unrated");
    }
}
