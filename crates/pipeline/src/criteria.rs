//! Query criteria as supplied by the caller.
//!
//! Every criterion is optional. An empty string is treated exactly like an
//! absent criterion and does not constrain the result.

use crate::error::QueryError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Filter criteria for one query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterCriteria {
    /// Matched against the name (substring) or the year (exact)
    pub search_term: String,
    /// A comparison such as `">7"` or `"<5.5"`
    pub rating_filter: Option<String>,
    pub genre_filter: Option<String>,
    pub director_filter: Option<String>,
}

/// `None` for absent or empty criteria.
fn active(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|value| !value.is_empty())
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn rating(mut self, expression: impl Into<String>) -> Self {
        self.rating_filter = Some(expression.into());
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre_filter = Some(genre.into());
        self
    }

    pub fn director(mut self, director: impl Into<String>) -> Self {
        self.director_filter = Some(director.into());
        self
    }

    pub fn search_term(&self) -> Option<&str> {
        Some(self.search_term.as_str()).filter(|term| !term.is_empty())
    }

    pub fn rating_filter(&self) -> Option<&str> {
        active(&self.rating_filter)
    }

    pub fn genre_filter(&self) -> Option<&str> {
        active(&self.genre_filter)
    }

    pub fn director_filter(&self) -> Option<&str> {
        active(&self.director_filter)
    }

    /// True when no criterion constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.search_term().is_none()
            && self.rating_filter().is_none()
            && self.genre_filter().is_none()
            && self.director_filter().is_none()
    }
}

/// A parsed rating comparison.
///
/// Built once per query from text like `">7"`, then applied to every record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatingFilter {
    LessThan(f64),
    GreaterThan(f64),
}

impl RatingFilter {
    pub fn threshold(self) -> f64 {
        match self {
            RatingFilter::LessThan(threshold) | RatingFilter::GreaterThan(threshold) => threshold,
        }
    }

    /// Whether a normalized rating passes the comparison. Comparisons are strict.
    pub fn accepts(self, rating: f64) -> bool {
        match self {
            RatingFilter::LessThan(threshold) => rating < threshold,
            RatingFilter::GreaterThan(threshold) => rating > threshold,
        }
    }
}

impl FromStr for RatingFilter {
    type Err = QueryError;

    /// Parse `<N` or `>N`. Whitespace around the expression and around the
    /// number is ignored.
    fn from_str(expression: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| QueryError::InvalidRatingFilter {
            expression: expression.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = expression.trim();
        let mut chars = trimmed.chars();
        let operator = chars.next().ok_or_else(|| invalid("empty expression"))?;
        let number = chars.as_str().trim();

        if operator != '<' && operator != '>' {
            return Err(invalid("missing comparison operator"));
        }
        if number.is_empty() {
            return Err(invalid("missing threshold"));
        }

        let threshold: f64 = number
            .parse()
            .map_err(|_| invalid("threshold is not a number"))?;
        if !threshold.is_finite() {
            return Err(invalid("threshold is not a finite number"));
        }

        Ok(match operator {
            '<' => RatingFilter::LessThan(threshold),
            _ => RatingFilter::GreaterThan(threshold),
        })
    }
}

impl fmt::Display for RatingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingFilter::LessThan(threshold) => write!(f, "<{}", threshold),
            RatingFilter::GreaterThan(threshold) => write!(f, ">{}", threshold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rating_filter() {
        assert_eq!(">7".parse::<RatingFilter>().unwrap(), RatingFilter::GreaterThan(7.0));
        assert_eq!("<5.5".parse::<RatingFilter>().unwrap(), RatingFilter::LessThan(5.5));
        assert_eq!(" > 8 ".parse::<RatingFilter>().unwrap(), RatingFilter::GreaterThan(8.0));
    }

    #[test]
    fn test_invalid_rating_filters() {
        for expression in ["garbage", "7", ">", "=7", ">seven", ">7.5.1", "", ">inf", "<NaN"] {
            let err = expression.parse::<RatingFilter>().unwrap_err();
            assert!(
                matches!(err, QueryError::InvalidRatingFilter { .. }),
                "{:?} should be rejected",
                expression
            );
        }
    }

    #[test]
    fn test_rating_filter_comparisons_are_strict() {
        let above = RatingFilter::GreaterThan(7.0);
        assert!(above.accepts(7.1));
        assert!(!above.accepts(7.0));

        let below = RatingFilter::LessThan(7.0);
        assert!(below.accepts(6.9));
        assert!(!below.accepts(7.0));
        assert_eq!(below.threshold(), 7.0);
        assert_eq!(below.to_string(), "<7");
    }

    #[test]
    fn test_empty_criteria_are_inactive() {
        let criteria = FilterCriteria::new().rating("").genre("").director("Akhtar");

        assert_eq!(criteria.search_term(), None);
        assert_eq!(criteria.rating_filter(), None);
        assert_eq!(criteria.genre_filter(), None);
        assert_eq!(criteria.director_filter(), Some("Akhtar"));
        assert!(!criteria.is_unconstrained());
        assert!(FilterCriteria::new().genre("").is_unconstrained());
    }
}
