//! Shared error types for the analysis pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cinemetrics operations.
///
/// Every variant is fatal to the run: a failed load or clean means the
/// analysis cannot produce meaningful aggregates, so there is no retry or
/// partial-result path.
#[derive(Debug, Error)]
pub enum Error {
    /// The dataset path did not resolve to a file
    #[error("Dataset not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// The CSV header row is missing required columns
    #[error("Dataset schema mismatch, missing columns: {}", missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },

    /// A release_date value did not match the expected month/day/year format.
    /// Coercing it silently would corrupt every date-derived aggregate.
    #[error("Unparseable release_date {value:?} for movie id {id}")]
    DateParse { id: i64, value: String },

    /// A query's filtered input matched zero rows. A zero or NaN sentinel
    /// would be indistinguishable from a real zero-revenue group.
    #[error("No rows matched query: {query}")]
    EmptyGroup { query: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV decoding errors
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Convenience Result type alias using the shared Error
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an empty-group error for the named query.
    pub fn empty_group(query: impl Into<String>) -> Self {
        Self::EmptyGroup {
            query: query.into(),
        }
    }
}
