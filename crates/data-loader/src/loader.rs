//! Building a [`MovieTable`] from disk.

use crate::error::Result;
use crate::parser::{self, Encoding};
use crate::types::{Field, MovieTable};
use std::path::Path;

impl MovieTable {
    /// Load a movie export from a CSV file.
    ///
    /// This is the main entry point for ingestion. Either the whole file is
    /// loaded or an error is returned; callers never see a truncated table.
    pub fn load_from_file(path: &Path, encoding: Encoding) -> Result<Self> {
        tracing::info!("Loading movies from {} ({:?})", path.display(), encoding);

        let table = parser::parse_movies_file(path, encoding)?;

        let missing: Vec<&str> = Field::ALL
            .iter()
            .filter(|field| !table.has_column(**field))
            .map(|field| field.header())
            .collect();
        if !missing.is_empty() {
            tracing::debug!("Optional columns absent from source: {}", missing.join(", "));
        }

        tracing::info!(
            "Loaded {} movies with {} known columns",
            table.len(),
            table.columns().len()
        );

        Ok(table)
    }
}
