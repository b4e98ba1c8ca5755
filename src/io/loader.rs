//! CSV loader for the TMDB export.

use crate::core::RawMovieRecord;
use crate::errors::{Error, Result};
use std::collections::HashSet;
use std::path::Path;

/// Columns the export must carry. Extra columns are tolerated; missing ones
/// are a schema mismatch.
pub const REQUIRED_COLUMNS: [&str; 21] = [
    "id",
    "imdb_id",
    "popularity",
    "budget",
    "revenue",
    "original_title",
    "cast",
    "homepage",
    "director",
    "tagline",
    "keywords",
    "overview",
    "runtime",
    "genres",
    "production_companies",
    "release_date",
    "vote_count",
    "vote_average",
    "release_year",
    "budget_adj",
    "revenue_adj",
];

/// Read the dataset into raw records, preserving row order and values.
///
/// Fails with `SourceNotFound` if the path does not resolve and with
/// `SchemaMismatch` if the header lacks required columns. This is a single
/// local read; there are no retries.
pub fn load_movies(path: &Path) -> Result<Vec<RawMovieRecord>> {
    if !path.is_file() {
        return Err(Error::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path)?;
    validate_headers(reader.headers()?)?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }

    log::debug!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn validate_headers(headers: &csv::StringRecord) -> Result<()> {
    let present: HashSet<&str> = headers.iter().collect();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !present.contains(**column))
        .map(|column| column.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::SchemaMismatch { missing })
    }
}
