//! Cleaning pass: duplicate removal, required-field filtering, date
//! normalization and column derivation.
//!
//! The pass is a pure function of its input rows. Running it twice over the
//! same raw rows yields identical tables; nothing outside the rows is read
//! or written.

use crate::core::{CleaningStats, Month, MovieRecord, MovieTable, RawMovieRecord};
use crate::errors::{Error, Result};
use chrono::{Datelike, NaiveDate};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Clean the raw rows into an analysis-ready table.
///
/// Steps, each order-independent of the others:
/// 1. Drop exact full-row duplicates, keeping the first occurrence.
/// 2. Drop rows whose `imdb_id` is missing.
/// 3. Parse `release_date`; an unparseable date is fatal, never coerced.
/// 4. Derive the release year and month abbreviation from the parsed date.
///
/// Column pruning happens by construction: `MovieRecord` has no fields for
/// the free-text columns or the imdb_id cross-reference.
pub fn clean(raw: Vec<RawMovieRecord>) -> Result<(MovieTable, CleaningStats)> {
    let raw_rows = raw.len();

    let deduped = drop_duplicates(raw);
    let duplicates_removed = raw_rows - deduped.len();

    let with_imdb: Vec<RawMovieRecord> = deduped
        .into_iter()
        .filter(|row| !missing_imdb_id(row))
        .collect();
    let missing_imdb_removed = raw_rows - duplicates_removed - with_imdb.len();

    let records: Vec<MovieRecord> = with_imdb
        .into_iter()
        .map(normalize_row)
        .collect::<Result<_>>()?;

    let stats = CleaningStats {
        raw_rows,
        duplicates_removed,
        missing_imdb_removed,
        clean_rows: records.len(),
    };

    log::info!(
        "Cleaned dataset: {} raw rows, {} duplicates and {} rows without imdb_id removed, {} remain",
        stats.raw_rows,
        stats.duplicates_removed,
        stats.missing_imdb_removed,
        stats.clean_rows
    );

    Ok((MovieTable::new(records), stats))
}

/// Remove rows that equal an earlier row in every column, keeping the first.
/// Rows are bucketed by hash and confirmed with full equality, so float
/// columns compare bit-exactly.
fn drop_duplicates(raw: Vec<RawMovieRecord>) -> Vec<RawMovieRecord> {
    let mut buckets: HashMap<u64, Vec<usize>> = HashMap::new();
    let mut kept: Vec<RawMovieRecord> = Vec::with_capacity(raw.len());

    for row in raw {
        let bucket = buckets.entry(row_key(&row)).or_default();
        if bucket.iter().any(|&index| kept[index] == row) {
            continue;
        }
        bucket.push(kept.len());
        kept.push(row);
    }

    kept
}

fn missing_imdb_id(row: &RawMovieRecord) -> bool {
    row.imdb_id
        .as_deref()
        .map_or(true, |id| id.trim().is_empty())
}

fn normalize_row(row: RawMovieRecord) -> Result<MovieRecord> {
    let release_date = parse_release_date(&row.release_date).ok_or_else(|| Error::DateParse {
        id: row.id,
        value: row.release_date.clone(),
    })?;

    // 1..=12 always maps; chrono guarantees the range.
    let month = Month::from_number(release_date.month()).expect("chrono month out of 1..=12");

    Ok(MovieRecord {
        id: row.id,
        director: row.director,
        release_date,
        // The export's own release_year column is discarded; the year label
        // comes from the normalized date.
        release_year: release_date.year(),
        month,
        popularity: row.popularity,
        vote_average: row.vote_average,
        vote_count: row.vote_count,
        runtime: row.runtime,
        revenue: row.revenue,
        revenue_adj: row.revenue_adj,
        budget: row.budget,
        budget_adj: row.budget_adj,
    })
}

/// Parse the export's month/day/year date. The two-digit form goes first:
/// `%y` rejects a four-digit year as trailing input, while `%Y` would accept
/// "15" as the literal year 15. Two-digit years take chrono's pivot, which
/// matches how pandas reads the same file.
fn parse_release_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%m/%d/%y")
        .or_else(|_| NaiveDate::parse_from_str(value, "%m/%d/%Y"))
        .ok()
}

fn row_key(row: &RawMovieRecord) -> u64 {
    let mut hasher = DefaultHasher::new();
    row.id.hash(&mut hasher);
    row.imdb_id.hash(&mut hasher);
    row.popularity.to_bits().hash(&mut hasher);
    row.budget.hash(&mut hasher);
    row.revenue.hash(&mut hasher);
    row.original_title.hash(&mut hasher);
    row.cast.hash(&mut hasher);
    row.homepage.hash(&mut hasher);
    row.director.hash(&mut hasher);
    row.tagline.hash(&mut hasher);
    row.keywords.hash(&mut hasher);
    row.overview.hash(&mut hasher);
    row.runtime.hash(&mut hasher);
    row.genres.hash(&mut hasher);
    row.production_companies.hash(&mut hasher);
    row.release_date.hash(&mut hasher);
    row.vote_count.hash(&mut hasher);
    row.vote_average.to_bits().hash(&mut hasher);
    row.release_year.hash(&mut hasher);
    row.budget_adj.to_bits().hash(&mut hasher);
    row.revenue_adj.to_bits().hash(&mut hasher);
    hasher.finish()
}
