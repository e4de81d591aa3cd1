//! Closest-date matching against a price series

use crate::core::series::{PriceRecord, PriceSeries};
use chrono::NaiveDate;
use tracing::debug;

/// Returns the record whose date is nearest to `target`.
///
/// When two records are equally distant the earlier one wins, and among
/// records sharing a date the first loaded one wins. Targets outside the
/// series resolve to its first or last record.
pub fn nearest(series: &PriceSeries, target: NaiveDate) -> &PriceRecord {
    let records = series.records();
    let idx = nearest_index(records, target);
    let record = &records[idx];
    debug!(
        %target,
        resolved = %record.date,
        distance_days = distance(record.date, target),
        "Resolved nearest price record"
    );
    record
}

/// Index of the nearest record in an ascending, non-empty slice.
fn nearest_index(records: &[PriceRecord], target: NaiveDate) -> usize {
    // First record dated on or after the target.
    let upper = records.partition_point(|r| r.date < target);
    if upper == 0 {
        return 0;
    }

    let below = records[upper - 1].date;
    let lower = records.partition_point(|r| r.date < below);
    if upper == records.len() {
        return lower;
    }

    if distance(below, target) <= distance(records[upper].date, target) {
        lower
    } else {
        upper
    }
}

fn distance(date: NaiveDate, target: NaiveDate) -> i64 {
    (date - target).num_days().abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn series(points: &[(NaiveDate, f64)]) -> PriceSeries {
        PriceSeries::new(
            points
                .iter()
                .map(|&(d, c)| PriceRecord::new(d, c))
                .collect(),
        )
        .unwrap()
    }

    fn sample() -> PriceSeries {
        series(&[
            (date(2017, 12, 15), 100.0),
            (date(2017, 12, 20), 120.0),
            (date(2018, 1, 1), 150.0),
        ])
    }

    #[test]
    fn picks_closest_date() {
        let s = sample();
        assert_eq!(nearest(&s, date(2017, 12, 17)).date, date(2017, 12, 15));
        assert_eq!(nearest(&s, date(2017, 12, 19)).date, date(2017, 12, 20));
        assert_eq!(nearest(&s, date(2017, 12, 28)).date, date(2018, 1, 1));
    }

    #[test]
    fn exact_match_is_returned() {
        let s = sample();
        assert_eq!(nearest(&s, date(2017, 12, 20)).close, 120.0);
    }

    #[test]
    fn tie_goes_to_earlier_date() {
        let s = series(&[(date(2020, 1, 1), 1.0), (date(2020, 1, 5), 2.0)]);
        assert_eq!(nearest(&s, date(2020, 1, 3)).date, date(2020, 1, 1));
    }

    #[test]
    fn duplicate_dates_resolve_to_first_loaded() {
        let s = series(&[
            (date(2020, 1, 1), 1.0),
            (date(2020, 1, 1), 9.0),
            (date(2020, 1, 4), 2.0),
            (date(2020, 1, 4), 8.0),
        ]);
        assert_eq!(nearest(&s, date(2020, 1, 2)).close, 1.0);
        assert_eq!(nearest(&s, date(2020, 1, 4)).close, 2.0);
        assert_eq!(nearest(&s, date(2020, 2, 1)).close, 2.0);
    }

    #[test]
    fn targets_outside_range_clamp_to_ends() {
        let s = sample();
        assert_eq!(nearest(&s, date(2000, 1, 1)).date, date(2017, 12, 15));
        assert_eq!(nearest(&s, date(2030, 1, 1)).date, date(2018, 1, 1));
    }

    #[test]
    fn single_record_series() {
        let s = series(&[(date(2019, 6, 1), 42.0)]);
        assert_eq!(nearest(&s, date(2019, 1, 1)).close, 42.0);
        assert_eq!(nearest(&s, date(2019, 6, 1)).close, 42.0);
        assert_eq!(nearest(&s, date(2020, 1, 1)).close, 42.0);
    }
}
