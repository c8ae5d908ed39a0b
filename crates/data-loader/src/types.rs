//! Core domain types for movie tables.
//!
//! - [`Field`]: the closed vocabulary of column names
//! - [`MovieRecord`]: one row, every field kept as the raw source text
//! - [`MovieTable`]: the in-memory record set plus the columns its source had

use serde::Serialize;

// =============================================================================
// Field vocabulary
// =============================================================================

/// A column the engine knows about.
///
/// Header names are mapped onto this enum once at ingestion, so nothing
/// downstream ever looks a field up by string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Field {
    Name,
    Year,
    Duration,
    Genre,
    Rating,
    Votes,
    Director,
    Actor1,
    Actor2,
    Actor3,
}

impl Field {
    /// Every field, in the order of the IMDb export.
    pub const ALL: [Field; 10] = [
        Field::Name,
        Field::Year,
        Field::Duration,
        Field::Genre,
        Field::Rating,
        Field::Votes,
        Field::Director,
        Field::Actor1,
        Field::Actor2,
        Field::Actor3,
    ];

    /// Columns a table must have to be queryable.
    pub const REQUIRED: [Field; 4] = [Field::Name, Field::Year, Field::Genre, Field::Director];

    /// The header text for this field.
    pub fn header(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Year => "Year",
            Field::Duration => "Duration",
            Field::Genre => "Genre",
            Field::Rating => "Rating",
            Field::Votes => "Votes",
            Field::Director => "Director",
            Field::Actor1 => "Actor 1",
            Field::Actor2 => "Actor 2",
            Field::Actor3 => "Actor 3",
        }
    }

    /// Map a header cell onto a field. Surrounding whitespace is ignored.
    ///
    /// Returns `None` for columns the engine does not use.
    pub fn from_header(header: &str) -> Option<Field> {
        let header = header.trim();
        Field::ALL.into_iter().find(|field| field.header() == header)
    }

    pub fn is_required(self) -> bool {
        Field::REQUIRED.contains(&self)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.header())
    }
}

// =============================================================================
// Records
// =============================================================================

/// A single movie row.
///
/// Values are stored exactly as read. A field the source did not provide is
/// an empty string, never missing. Numeric views are derived on demand by the
/// `normalized_*` accessors in [`crate::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MovieRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Duration")]
    pub duration: String,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Rating")]
    pub rating: String,
    #[serde(rename = "Votes")]
    pub votes: String,
    #[serde(rename = "Director")]
    pub director: String,
    #[serde(rename = "Actor 1")]
    pub actor_1: String,
    #[serde(rename = "Actor 2")]
    pub actor_2: String,
    #[serde(rename = "Actor 3")]
    pub actor_3: String,
}

impl MovieRecord {
    /// Create a record with only a name; every other field is empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style setter, mostly useful for tests and fixtures.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Raw value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Year => &self.year,
            Field::Duration => &self.duration,
            Field::Genre => &self.genre,
            Field::Rating => &self.rating,
            Field::Votes => &self.votes,
            Field::Director => &self.director,
            Field::Actor1 => &self.actor_1,
            Field::Actor2 => &self.actor_2,
            Field::Actor3 => &self.actor_3,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Year => &mut self.year,
            Field::Duration => &mut self.duration,
            Field::Genre => &mut self.genre,
            Field::Rating => &mut self.rating,
            Field::Votes => &mut self.votes,
            Field::Director => &mut self.director,
            Field::Actor1 => &mut self.actor_1,
            Field::Actor2 => &mut self.actor_2,
            Field::Actor3 => &mut self.actor_3,
        };
        *slot = value.into();
    }
}

// =============================================================================
// MovieTable - the in-memory record set
// =============================================================================

/// All records of one query session, plus the columns the source provided.
///
/// Records are never mutated once loaded. Queries borrow from the table and
/// return fresh vectors, so a table behind an `Arc` can be shared by readers.
#[derive(Debug, Clone)]
pub struct MovieTable {
    /// Columns present in the source header, in header order
    pub(crate) columns: Vec<Field>,
    pub(crate) records: Vec<MovieRecord>,
}

impl MovieTable {
    /// Creates an empty table whose source had every known column.
    pub fn new() -> Self {
        Self::with_columns(Field::ALL.to_vec())
    }

    /// Creates an empty table with an explicit column set.
    pub fn with_columns(columns: Vec<Field>) -> Self {
        Self {
            columns,
            records: Vec::new(),
        }
    }

    /// Build a table from records that carry every column.
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        Self {
            columns: Field::ALL.to_vec(),
            records,
        }
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn columns(&self) -> &[Field] {
        &self.columns
    }

    /// Whether the source header had this column.
    pub fn has_column(&self, field: Field) -> bool {
        self.columns.contains(&field)
    }

    pub fn insert_record(&mut self, record: MovieRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for MovieTable {
    fn default() -> Self {
        Self::new()
    }
}
