//! Test helpers: factory functions for building dataset rows without
//! spelling out all 21 columns in every test.

use crate::core::{Month, MovieRecord, MovieTable, RawMovieRecord};
use chrono::NaiveDate;

/// A raw row with plausible defaults for the columns a test does not care
/// about. Tests mutate the returned record for the fields under test.
pub fn raw_movie(id: i64, imdb_id: &str, director: &str, release_date: &str) -> RawMovieRecord {
    RawMovieRecord {
        id,
        imdb_id: Some(imdb_id.to_string()),
        popularity: 1.5,
        budget: 10_000_000,
        revenue: 30_000_000,
        original_title: format!("Movie {id}"),
        cast: Some("Cast A|Cast B".to_string()),
        homepage: None,
        director: Some(director.to_string()),
        tagline: None,
        keywords: None,
        overview: Some("An overview.".to_string()),
        runtime: 100,
        genres: Some("Drama".to_string()),
        production_companies: None,
        release_date: release_date.to_string(),
        vote_count: 250,
        vote_average: 6.5,
        release_year: 2011,
        budget_adj: 11_000_000.0,
        revenue_adj: 33_000_000.0,
    }
}

/// A clean record with the given director, year/month and revenue, with
/// neutral values elsewhere.
pub fn movie(id: i64, director: Option<&str>, year: i32, month: Month, revenue: i64) -> MovieRecord {
    let month_number = month as u32 + 1;
    MovieRecord {
        id,
        director: director.map(str::to_string),
        release_date: NaiveDate::from_ymd_opt(year, month_number, 15)
            .expect("mid-month date is always valid"),
        release_year: year,
        month,
        popularity: 1.0,
        vote_average: 6.0,
        vote_count: 100,
        runtime: 100,
        revenue,
        revenue_adj: revenue as f64,
        budget: revenue / 3,
        budget_adj: revenue as f64 / 3.0,
    }
}

/// A table from clean records.
pub fn table(records: Vec<MovieRecord>) -> MovieTable {
    MovieTable::new(records)
}
