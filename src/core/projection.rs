//! Hypothetical portfolio value over time

use crate::core::calculator::units_for;
use crate::core::series::PriceSeries;
use chrono::NaiveDate;
use serde::Serialize;

/// Portfolio value on one date in the projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub date: NaiveDate,
    pub portfolio_value: f64,
}

/// Values the units bought on `purchased` at `buy_price` against every close
/// from that date onward. Every value is zero when `buy_price` is not
/// positive.
pub fn project(
    series: &PriceSeries,
    purchased: NaiveDate,
    amount: f64,
    buy_price: f64,
) -> Vec<ProjectionPoint> {
    let units = units_for(amount, buy_price);
    series
        .since(purchased)
        .iter()
        .map(|record| ProjectionPoint {
            date: record.date,
            portfolio_value: if buy_price > 0.0 {
                units * record.close
            } else {
                0.0
            },
        })
        .collect()
}
