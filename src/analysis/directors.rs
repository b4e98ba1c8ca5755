//! Which directors release movies most frequently.

use crate::core::{DirectorCount, MovieTable};
use crate::errors::{Error, Result};
use std::collections::HashMap;

pub const DEFAULT_TOP_DIRECTORS: usize = 10;

/// Count movies per director and return the `limit` busiest, count
/// descending. Ties keep the order in which directors were first
/// encountered in the table. Rows without a director are skipped.
pub fn top_directors(table: &MovieTable, limit: usize) -> Result<Vec<DirectorCount>> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();

    for (position, record) in table.iter().enumerate() {
        if let Some(director) = record.director.as_deref() {
            let entry = counts.entry(director).or_insert((0, position));
            entry.0 += 1;
        }
    }

    if counts.is_empty() {
        return Err(Error::empty_group("movies per director"));
    }

    let mut ranking: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(director, (movies, first_seen))| (director, movies, first_seen))
        .collect();
    ranking.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    Ok(ranking
        .into_iter()
        .take(limit)
        .map(|(director, movies, _)| DirectorCount {
            director: director.to_string(),
            movies,
        })
        .collect())
}
