//! Case-insensitive substring filter on a text field.

use crate::traits::Filter;
use data_loader::{Field, MovieRecord};

/// Keeps records whose `field` contains `needle`, ignoring case.
///
/// Used for the genre and director criteria. Genre cells hold lists such as
/// `"Drama, Music"`, so a substring test matches any listed genre.
pub struct FieldContainsFilter {
    name: String,
    field: Field,
    needle: String,
}

impl FieldContainsFilter {
    pub fn new(field: Field, needle: &str) -> Self {
        Self {
            name: format!("FieldContainsFilter({})", field),
            field,
            needle: needle.to_lowercase(),
        }
    }

    pub fn genre(needle: &str) -> Self {
        Self::new(Field::Genre, needle)
    }

    pub fn director(needle: &str) -> Self {
        Self::new(Field::Director, needle)
    }
}

impl Filter for FieldContainsFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, movie: &MovieRecord) -> bool {
        movie.get(self.field).to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_filter() {
        let movies = vec![
            MovieRecord::new("Gully Boy").with(Field::Genre, "Drama, Music"),
            MovieRecord::new("Hera Pheri").with(Field::Genre, "Comedy, Crime"),
            MovieRecord::new("Untitled"),
        ];

        let filter = FieldContainsFilter::genre("MUSIC");
        let filtered = filter.apply(movies.iter().collect());

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Gully Boy");
    }

    #[test]
    fn test_director_filter() {
        let filter = FieldContainsFilter::director("akhtar");

        assert!(filter.matches(&MovieRecord::new("Gully Boy").with(Field::Director, "Zoya Akhtar")));
        assert!(!filter.matches(&MovieRecord::new("Lagaan").with(Field::Director, "Ashutosh Gowariker")));
        assert_eq!(filter.name(), "FieldContainsFilter(Director)");
    }
}
