//! Rows for tabular output.

use data_loader::{Field, MovieRecord, MovieTable};

/// Shown for a column the source file did not have.
pub const MISSING_VALUE: &str = "N/A";

/// Display columns and their headings, in display order.
pub const TABLE_COLUMNS: [(Field, &str); 9] = [
    (Field::Name, "Movie Name"),
    (Field::Year, "Year"),
    (Field::Genre, "Genre"),
    (Field::Director, "Director"),
    (Field::Actor1, "Actor 1"),
    (Field::Actor2, "Actor 2"),
    (Field::Actor3, "Actor 3"),
    (Field::Rating, "Rating"),
    (Field::Votes, "Votes"),
];

pub fn table_headers() -> Vec<&'static str> {
    TABLE_COLUMNS.iter().map(|(_, heading)| *heading).collect()
}

/// Raw values of one record in display order.
pub fn table_row(table: &MovieTable, movie: &MovieRecord) -> Vec<String> {
    TABLE_COLUMNS
        .iter()
        .map(|(field, _)| {
            if table.has_column(*field) {
                movie.get(*field).to_string()
            } else {
                MISSING_VALUE.to_string()
            }
        })
        .collect()
}

pub fn table_rows(table: &MovieTable, movies: &[&MovieRecord]) -> Vec<Vec<String>> {
    movies.iter().map(|movie| table_row(table, movie)).collect()
}
