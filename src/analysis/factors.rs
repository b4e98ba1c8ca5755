//! How adjusted revenue moves with budget, popularity and vote count.

use crate::core::{FactorAssociation, LinearFit, MovieTable, RevenueFactor};
use crate::errors::{Error, Result};

/// Pair each factor column with adjusted revenue and fit a least-squares
/// line through the points. The raw pairs travel with the fit so a renderer
/// can draw the scatter; the fit itself is the reduced summary.
pub fn revenue_factors(table: &MovieTable) -> Result<Vec<FactorAssociation>> {
    if table.is_empty() {
        return Err(Error::empty_group("revenue factor pairings"));
    }

    let factors = [
        RevenueFactor::Budget,
        RevenueFactor::Popularity,
        RevenueFactor::VoteCount,
    ];

    Ok(factors
        .into_iter()
        .map(|factor| associate(table, factor))
        .collect())
}

fn associate(table: &MovieTable, factor: RevenueFactor) -> FactorAssociation {
    let pairs: Vec<(f64, f64)> = table
        .iter()
        .map(|record| {
            let x = match factor {
                RevenueFactor::Budget => record.budget as f64,
                RevenueFactor::Popularity => record.popularity,
                RevenueFactor::VoteCount => record.vote_count as f64,
            };
            (x, record.revenue_adj)
        })
        .collect();

    let fit = linear_fit(&pairs);
    FactorAssociation { factor, pairs, fit }
}

/// Closed-form simple linear regression plus Pearson r. A column with no
/// spread gets a flat line through the mean and r = 0.
fn linear_fit(pairs: &[(f64, f64)]) -> LinearFit {
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let (slope, intercept) = if var_x > 0.0 {
        let slope = cov / var_x;
        (slope, mean_y - slope * mean_x)
    } else {
        (0.0, mean_y)
    };

    let r = if var_x > 0.0 && var_y > 0.0 {
        cov / (var_x.sqrt() * var_y.sqrt())
    } else {
        0.0
    };

    LinearFit {
        slope,
        intercept,
        r,
        samples: pairs.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Month;
    use crate::testkit::{movie, table};

    #[test]
    fn perfectly_linear_data_fits_exactly() {
        // revenue_adj = 2 * budget (testkit sets revenue_adj = revenue,
        // budget = revenue / 3; override for a clean slope)
        let mut records = Vec::new();
        for (i, budget) in [10_i64, 20, 30, 40].iter().enumerate() {
            let mut m = movie(i as i64, Some("A"), 2010, Month::Jun, 0);
            m.budget = *budget;
            m.revenue_adj = (*budget as f64) * 2.0;
            records.push(m);
        }

        let associations = revenue_factors(&table(records)).unwrap();
        let budget = &associations[0];
        assert_eq!(budget.factor, RevenueFactor::Budget);
        assert!((budget.fit.slope - 2.0).abs() < 1e-9);
        assert!(budget.fit.intercept.abs() < 1e-6);
        assert!((budget.fit.r - 1.0).abs() < 1e-9);
        assert_eq!(budget.fit.samples, 4);
    }

    #[test]
    fn pairs_preserve_table_order() {
        let mut first = movie(1, Some("A"), 2010, Month::Jun, 0);
        first.popularity = 0.25;
        first.revenue_adj = 10.0;
        let mut second = movie(2, Some("B"), 2011, Month::Jul, 0);
        second.popularity = 0.75;
        second.revenue_adj = 20.0;

        let associations = revenue_factors(&table(vec![first, second])).unwrap();
        let popularity = &associations[1];
        assert_eq!(popularity.factor, RevenueFactor::Popularity);
        assert_eq!(popularity.pairs, vec![(0.25, 10.0), (0.75, 20.0)]);
    }

    #[test]
    fn constant_column_yields_flat_fit() {
        let mut records = Vec::new();
        for i in 0..3 {
            let mut m = movie(i, Some("A"), 2010, Month::Jun, 0);
            m.vote_count = 500;
            m.revenue_adj = 100.0 + i as f64;
            records.push(m);
        }

        let associations = revenue_factors(&table(records)).unwrap();
        let votes = &associations[2];
        assert_eq!(votes.fit.slope, 0.0);
        assert_eq!(votes.fit.r, 0.0);
        assert!((votes.fit.intercept - 101.0).abs() < 1e-12);
    }

    #[test]
    fn covers_all_three_factors_in_order() {
        let t = table(vec![movie(1, Some("A"), 2010, Month::Jun, 100)]);
        let factors: Vec<RevenueFactor> = revenue_factors(&t)
            .unwrap()
            .iter()
            .map(|a| a.factor)
            .collect();
        assert_eq!(
            factors,
            vec![
                RevenueFactor::Budget,
                RevenueFactor::Popularity,
                RevenueFactor::VoteCount
            ]
        );
    }

    #[test]
    fn empty_table_is_an_empty_group() {
        assert!(matches!(
            revenue_factors(&table(vec![])),
            Err(Error::EmptyGroup { .. })
        ));
    }
}
