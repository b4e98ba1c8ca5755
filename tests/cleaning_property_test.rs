use cinemetrics::cleaning::clean;
use cinemetrics::core::RawMovieRecord;
use proptest::prelude::*;

fn arb_raw_movie() -> impl Strategy<Value = RawMovieRecord> {
    (
        0..40i64,
        any::<bool>(),
        prop::option::of("[A-Z][a-z]{2,8}"),
        (1u32..=12, 1u32..=28, 1970i32..=2015),
        0..500_000_000i64,
    )
        .prop_map(|(id, has_imdb_id, director, (month, day, year), revenue)| {
            RawMovieRecord {
                id,
                // Keyed to the id so that raw rows differing only in pruned
                // columns cannot collapse into equal clean rows.
                imdb_id: has_imdb_id.then(|| format!("tt{id:07}")),
                popularity: (revenue % 1000) as f64 / 100.0,
                budget: revenue / 3,
                revenue,
                original_title: format!("Movie {id}"),
                cast: None,
                homepage: None,
                director,
                tagline: None,
                keywords: None,
                overview: None,
                runtime: 80 + (id % 60),
                genres: None,
                production_companies: None,
                release_date: format!("{month}/{day}/{year}"),
                vote_count: revenue % 5000,
                vote_average: 5.0 + (id % 50) as f64 / 10.0,
                release_year: year,
                budget_adj: revenue as f64 / 3.0,
                revenue_adj: revenue as f64,
            }
        })
}

proptest! {
    #[test]
    fn cleaning_is_idempotent(rows in prop::collection::vec(arb_raw_movie(), 0..60)) {
        let first = clean(rows.clone());
        let second = clean(rows);
        match (first, second) {
            (Ok((table_a, stats_a)), Ok((table_b, stats_b))) => {
                prop_assert_eq!(table_a, table_b);
                prop_assert_eq!(stats_a, stats_b);
            }
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "clean was not deterministic"),
        }
    }

    #[test]
    fn clean_tables_have_no_full_duplicates(rows in prop::collection::vec(arb_raw_movie(), 0..40)) {
        if let Ok((table, stats)) = clean(rows.clone()) {
            for (i, a) in table.records.iter().enumerate() {
                for b in table.records.iter().skip(i + 1) {
                    prop_assert_ne!(a, b);
                }
            }
            prop_assert_eq!(
                table.len(),
                stats.raw_rows - stats.duplicates_removed - stats.missing_imdb_removed
            );
            prop_assert_eq!(stats.raw_rows, rows.len());
        }
    }

    #[test]
    fn derived_columns_match_the_parsed_date(rows in prop::collection::vec(arb_raw_movie(), 1..40)) {
        use chrono::Datelike;
        if let Ok((table, _)) = clean(rows) {
            for record in table.iter() {
                prop_assert_eq!(record.release_year, record.release_date.year());
                prop_assert_eq!(record.month as u32 + 1, record.release_date.month());
            }
        }
    }
}
