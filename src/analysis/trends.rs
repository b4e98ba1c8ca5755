//! Year-over-year trends inside a fixed window.

use crate::core::{MovieTable, YearlyTrend};
use crate::errors::{Error, Result};
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// The notebook's trend window.
pub const DEFAULT_TREND_YEARS: RangeInclusive<i32> = 2005..=2015;

#[derive(Default)]
struct YearAccumulator {
    movies: usize,
    popularity_sum: f64,
    vote_sum: f64,
    runtime_sum: i64,
    revenue_sum: i64,
}

/// Per-year mean popularity, mean rating, mean runtime, total revenue and
/// movie count for years inside the inclusive range, keys ascending.
///
/// Years with no matching rows are absent. A range matching zero rows is an
/// `EmptyGroup` failure; returning zero-valued years would be
/// indistinguishable from a real zero-revenue year.
pub fn yearly_trends(table: &MovieTable, years: RangeInclusive<i32>) -> Result<Vec<YearlyTrend>> {
    let mut groups: HashMap<i32, YearAccumulator> = HashMap::new();

    for record in table.iter() {
        if !years.contains(&record.release_year) {
            continue;
        }
        let group = groups.entry(record.release_year).or_default();
        group.movies += 1;
        group.popularity_sum += record.popularity;
        group.vote_sum += record.vote_average;
        group.runtime_sum += record.runtime;
        group.revenue_sum += record.revenue;
    }

    if groups.is_empty() {
        return Err(Error::empty_group(format!(
            "movies released {}..={}",
            years.start(),
            years.end()
        )));
    }

    let mut trends: Vec<YearlyTrend> = groups
        .into_iter()
        .map(|(year, group)| {
            // Every group holds at least one movie by construction.
            let movies = group.movies as f64;
            YearlyTrend {
                year,
                avg_popularity: group.popularity_sum / movies,
                avg_vote_average: group.vote_sum / movies,
                avg_runtime: group.runtime_sum as f64 / movies,
                total_revenue: group.revenue_sum,
                movie_count: group.movies,
            }
        })
        .collect();
    trends.sort_by_key(|trend| trend.year);

    Ok(trends)
}
