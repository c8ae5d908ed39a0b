//! Parser for delimited movie exports.
//!
//! The expected input is a comma-separated file whose first line is a header:
//!
//! ```text
//! Name,Year,Duration,Genre,Rating,Votes,Director,Actor 1,Actor 2,Actor 3
//! Gully Boy,(2019),153 min,"Drama, Music",8.0,"33,286",Zoya Akhtar,Ranveer Singh,Alia Bhatt,Siddhant Chaturvedi
//! ```
//!
//! Header cells are mapped onto [`Field`] once; rows are then read positionally.

use crate::error::{DataLoadError, Result};
use crate::types::{Field, MovieRecord, MovieTable};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Text encoding of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// ISO-8859-1. The IMDb India export uses it.
    #[default]
    Latin1,
    /// UTF-8; invalid sequences are replaced rather than rejected.
    Utf8,
}

/// Read a whole file and decode it to a `String`.
fn read_text(path: &Path, encoding: Encoding) -> Result<String> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    Ok(decode(&bytes, encoding))
}

fn decode(bytes: &[u8], encoding: Encoding) -> String {
    match encoding {
        // Every Latin-1 byte is the Unicode code point of the same value
        Encoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
        Encoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Strip a byte-order mark from the first header cell, whichever way it
/// was decoded.
fn strip_bom(cell: &str) -> &str {
    cell.trim_start_matches('\u{feff}')
        .trim_start_matches("\u{ef}\u{bb}\u{bf}")
}

/// Parse decoded CSV text into a [`MovieTable`].
///
/// `source` only names the input in error messages.
///
/// - Blank lines are skipped.
/// - Short rows are padded with empty strings, extra cells are ignored.
/// - Columns the engine does not know are dropped.
/// - A repeated column keeps the value of its last occurrence.
/// - A missing required column (see [`Field::REQUIRED`]) fails the load.
pub fn parse_movies(text: &str, source: &str) -> Result<MovieTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = reader.records();

    let header = match rows.next() {
        Some(header) => header?,
        None => {
            return Err(DataLoadError::EmptyFile {
                path: source.to_string(),
            });
        }
    };

    // Position of each known column in the header
    let mut layout: Vec<(usize, Field)> = Vec::new();
    for (position, cell) in header.iter().enumerate() {
        let cell = if position == 0 { strip_bom(cell) } else { cell };
        match Field::from_header(cell) {
            Some(field) => match layout.iter_mut().find(|(_, seen)| *seen == field) {
                Some(slot) => {
                    tracing::debug!("Duplicate column '{}' in {}, keeping the last", cell, source);
                    slot.0 = position;
                }
                None => layout.push((position, field)),
            },
            None => tracing::debug!("Ignoring unknown column '{}' in {}", cell, source),
        }
    }

    if let Some(missing) = Field::REQUIRED
        .iter()
        .find(|required| !layout.iter().any(|(_, field)| field == *required))
    {
        return Err(DataLoadError::MissingColumn {
            column: missing.header().to_string(),
            path: source.to_string(),
        });
    }

    let columns: Vec<Field> = layout.iter().map(|(_, field)| *field).collect();
    let mut table = MovieTable::with_columns(columns);

    for row in rows {
        let row = row?;
        if row.len() <= 1 && row.get(0).is_none_or(str::is_empty) {
            continue; // Skip empty lines
        }

        let mut record = MovieRecord::default();
        for (position, field) in &layout {
            if let Some(value) = row.get(*position) {
                record.set(*field, value);
            }
        }
        table.insert_record(record);
    }

    Ok(table)
}

/// Read and parse a movie export from disk.
pub fn parse_movies_file(path: &Path, encoding: Encoding) -> Result<MovieTable> {
    let text = read_text(path, encoding)?;
    parse_movies(&text, &path.display().to_string())
}
