//! Which release months accumulate the most revenue.

use crate::core::{Month, MonthRevenue, MovieTable};
use crate::errors::{Error, Result};
use std::collections::HashMap;

/// Sum revenue per release month, value descending. Months with no
/// releases are absent. Equal sums order by calendar position so the result
/// stays deterministic.
pub fn revenue_by_month(table: &MovieTable) -> Result<Vec<MonthRevenue>> {
    let mut totals: HashMap<Month, i64> = HashMap::new();

    for record in table.iter() {
        *totals.entry(record.month).or_insert(0) += record.revenue;
    }

    if totals.is_empty() {
        return Err(Error::empty_group("revenue per release month"));
    }

    let mut ranking: Vec<MonthRevenue> = totals
        .into_iter()
        .map(|(month, revenue)| MonthRevenue { month, revenue })
        .collect();
    ranking.sort_by(|a, b| b.revenue.cmp(&a.revenue).then(a.month.cmp(&b.month)));

    Ok(ranking)
}
