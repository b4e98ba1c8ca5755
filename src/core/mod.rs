pub mod types;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use types::{Month, MovieRecord, MovieTable, RawMovieRecord};

/// Everything one analysis run produces, ready for a writer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub dataset: PathBuf,
    pub timestamp: DateTime<Utc>,
    pub cleaning: CleaningStats,
    pub top_directors: Vec<DirectorCount>,
    pub yearly_trends: Vec<YearlyTrend>,
    pub revenue_by_month: Vec<MonthRevenue>,
    pub revenue_factors: Vec<FactorAssociation>,
}

/// Row accounting for the cleaning pass.
///
/// Invariant: `clean_rows = raw_rows - duplicates_removed - missing_imdb_removed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningStats {
    pub raw_rows: usize,
    pub duplicates_removed: usize,
    pub missing_imdb_removed: usize,
    pub clean_rows: usize,
}

/// One entry in the directors-by-movie-count ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorCount {
    pub director: String,
    pub movies: usize,
}

/// Per-year aggregates over the trend window. Absent years are simply
/// absent; a year appears only if at least one movie matched, so every mean
/// is over a non-empty group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YearlyTrend {
    pub year: i32,
    pub avg_popularity: f64,
    pub avg_vote_average: f64,
    pub avg_runtime: f64,
    pub total_revenue: i64,
    pub movie_count: usize,
}

/// Total revenue attributed to one release month.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRevenue {
    pub month: Month,
    pub revenue: i64,
}

/// The numeric columns paired against adjusted revenue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevenueFactor {
    Budget,
    Popularity,
    VoteCount,
}

impl std::fmt::Display for RevenueFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RevenueFactor::Budget => "budget",
            RevenueFactor::Popularity => "popularity",
            RevenueFactor::VoteCount => "vote count",
        };
        write!(f, "{label}")
    }
}

/// Least-squares fit summary for one factor/revenue pairing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation coefficient
    pub r: f64,
    pub samples: usize,
}

/// Raw paired columns plus their fit, for scatter+fit rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FactorAssociation {
    pub factor: RevenueFactor,
    /// (factor value, revenue_adj) per movie, in table order
    pub pairs: Vec<(f64, f64)>,
    pub fit: LinearFit,
}
