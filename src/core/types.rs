//! Record types for the TMDB movie dataset.
//!
//! The raw record mirrors the 21-column CSV export exactly; the clean record
//! keeps only what the queries read, so column pruning is enforced by the
//! type rather than by runtime column lists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the TMDB CSV export, untransformed.
///
/// Field names match the source column headers so serde can deserialize rows
/// directly. Free-text columns that can be empty in the export are `Option`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawMovieRecord {
    pub id: i64,
    pub imdb_id: Option<String>,
    pub popularity: f64,
    pub budget: i64,
    pub revenue: i64,
    pub original_title: String,
    pub cast: Option<String>,
    pub homepage: Option<String>,
    pub director: Option<String>,
    pub tagline: Option<String>,
    pub keywords: Option<String>,
    pub overview: Option<String>,
    pub runtime: i64,
    pub genres: Option<String>,
    pub production_companies: Option<String>,
    pub release_date: String,
    pub vote_count: i64,
    pub vote_average: f64,
    pub release_year: i32,
    pub budget_adj: f64,
    pub revenue_adj: f64,
}

/// English three-letter month abbreviation, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// Map a chrono month number (1..=12) to its abbreviation.
    pub fn from_number(month: u32) -> Option<Self> {
        static MONTHS: [Month; 12] = [
            Month::Jan,
            Month::Feb,
            Month::Mar,
            Month::Apr,
            Month::May,
            Month::Jun,
            Month::Jul,
            Month::Aug,
            Month::Sep,
            Month::Oct,
            Month::Nov,
            Month::Dec,
        ];
        MONTHS.get(month.checked_sub(1)? as usize).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One movie after cleaning.
///
/// `release_year` and `month` are derived from the parsed `release_date`;
/// the export's own `release_year` column is intentionally discarded in
/// favor of the date-derived value. The pruned free-text columns
/// (original_title, cast, homepage, tagline, keywords, overview, genres,
/// production_companies) and the `imdb_id` cross-reference have no field
/// here at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: i64,
    pub director: Option<String>,
    pub release_date: NaiveDate,
    pub release_year: i32,
    pub month: Month,
    pub popularity: f64,
    pub vote_average: f64,
    pub vote_count: i64,
    pub runtime: i64,
    pub revenue: i64,
    pub revenue_adj: f64,
    pub budget: i64,
    pub budget_adj: f64,
}

/// Ordered collection of clean movie records.
///
/// Invariants after cleaning: no two rows are full duplicates, no row had a
/// missing imdb_id in the source, and every release_date parsed. The table
/// is only read after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieTable {
    pub records: Vec<MovieRecord>,
}

impl MovieTable {
    pub fn new(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_from_number_covers_calendar() {
        assert_eq!(Month::from_number(1), Some(Month::Jan));
        assert_eq!(Month::from_number(6), Some(Month::Jun));
        assert_eq!(Month::from_number(12), Some(Month::Dec));
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }

    #[test]
    fn month_display_is_three_letter_abbreviation() {
        assert_eq!(Month::Jan.to_string(), "Jan");
        assert_eq!(Month::Dec.to_string(), "Dec");
    }

    #[test]
    fn months_order_by_calendar_position() {
        assert!(Month::Jan < Month::Feb);
        assert!(Month::Nov < Month::Dec);
    }
}
