//! # Data Loader Crate
//!
//! This crate loads movie exports (CSV) into an in-memory [`MovieTable`] and
//! turns raw cells into canonical values.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Field, MovieRecord, MovieTable)
//! - **parser**: Decode and parse delimited text into records
//! - **loader**: Load a table from disk
//! - **normalize**: Year / rating / vote normalization with fallbacks
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{Encoding, MovieTable};
//! use std::path::Path;
//!
//! let table = MovieTable::load_from_file(Path::new("data/imdb_movies_india.csv"), Encoding::Latin1)?;
//!
//! for movie in table.records() {
//!     println!("{} ({}) {:.1}", movie.name, movie.normalized_year(), movie.normalized_rating());
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod loader;
pub mod normalize;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use normalize::{UNKNOWN_YEAR, normalize_rating, normalize_votes, normalize_year};
pub use parser::Encoding;
pub use types::{Field, MovieRecord, MovieTable};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_creation() {
        let table = MovieTable::new();

        assert!(table.is_empty());
        assert_eq!(table.columns(), &Field::ALL);
    }

    #[test]
    fn test_insert_record() {
        let mut table = MovieTable::new();

        let movie = MovieRecord::new("Lagaan")
            .with(Field::Year, "(2001)")
            .with(Field::Genre, "Drama, Musical, Sport")
            .with(Field::Rating, "8.1");

        table.insert_record(movie.clone());

        let retrieved = &table.records()[0];
        assert_eq!(retrieved, &movie);
        assert_eq!(retrieved.get(Field::Genre), "Drama, Musical, Sport");
        assert_eq!(retrieved.get(Field::Director), "");
    }

    #[test]
    fn test_field_headers() {
        assert_eq!(Field::from_header("Actor 1"), Some(Field::Actor1));
        assert_eq!(Field::from_header(" Votes "), Some(Field::Votes));
        assert_eq!(Field::from_header("Box Office"), None);

        for field in Field::ALL {
            assert_eq!(Field::from_header(field.header()), Some(field));
        }
        assert!(Field::Director.is_required());
        assert!(!Field::Actor2.is_required());
    }

    #[test]
    fn test_record_serializes_with_header_names() {
        let movie = MovieRecord::new("Gully Boy").with(Field::Actor1, "Ranveer Singh");

        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["Name"], "Gully Boy");
        assert_eq!(json["Actor 1"], "Ranveer Singh");
        assert_eq!(json["Rating"], "");
    }
}
