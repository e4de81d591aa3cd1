//! The full calculation for one "what if I had bought" question.
//!
//! Resolves the purchase date against the series, prices the purchase against
//! the latest close and projects the holding forward. Every step is pure, so
//! the same series and query always produce the same [`Dashboard`].

use crate::core::calculator::{self, Returns};
use crate::core::error::QueryError;
use crate::core::projection::{self, ProjectionPoint};
use crate::core::resolver;
use crate::core::series::{PriceRecord, PriceSeries};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

/// Smallest amount accepted for a purchase.
pub const MIN_AMOUNT: f64 = 1.0;
pub const DEFAULT_AMOUNT: f64 = 100.0;

/// Purchase date used when none is given.
pub fn default_purchase_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 12, 17).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InvestmentQuery {
    pub amount: f64,
    pub target_date: NaiveDate,
}

impl InvestmentQuery {
    pub fn new(amount: f64, target_date: NaiveDate) -> Result<Self, QueryError> {
        if !amount.is_finite() || amount < MIN_AMOUNT {
            return Err(QueryError::AmountTooSmall {
                amount,
                min: MIN_AMOUNT,
            });
        }
        Ok(Self {
            amount,
            target_date,
        })
    }

    /// Checks the purchase date lies within the series.
    pub fn validate_against(&self, series: &PriceSeries) -> Result<(), QueryError> {
        if series.contains_date(self.target_date) {
            return Ok(());
        }
        let (first, last) = series.date_range();
        Err(QueryError::DateOutOfRange {
            date: self.target_date,
            first,
            last,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InvestmentResult {
    /// Date of the record actually used as the purchase price.
    pub resolved_date: NaiveDate,
    pub buy_price: f64,
    pub current_date: NaiveDate,
    pub current_price: f64,
    pub units_owned: f64,
    pub current_value: f64,
    pub roi_percent: f64,
    pub annualized_return_percent: Option<f64>,
}

impl InvestmentResult {
    /// Whether the zero fallback replaced the computed values.
    pub fn is_guarded(&self) -> bool {
        self.buy_price <= 0.0
    }
}

/// Everything the presentation layer needs for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub query: InvestmentQuery,
    pub result: InvestmentResult,
    pub projection: Vec<ProjectionPoint>,
    pub recent: Vec<PriceRecord>,
}

/// Prices a purchase of `amount` on the record nearest to `target_date`,
/// valued at the last close in the series.
pub fn evaluate(series: &PriceSeries, query: &InvestmentQuery) -> InvestmentResult {
    let bought = resolver::nearest(series, query.target_date);
    let current = series.last();

    let Returns {
        units_owned,
        current_value,
        roi_percent,
    } = calculator::calculate_returns(query.amount, bought.close, current.close);

    let annualized_return_percent = if bought.close > 0.0 {
        calculator::annualized_return(query.amount, current_value, bought.date, current.date)
    } else {
        None
    };

    InvestmentResult {
        resolved_date: bought.date,
        buy_price: bought.close,
        current_date: current.date,
        current_price: current.close,
        units_owned,
        current_value,
        roi_percent,
        annualized_return_percent,
    }
}

/// Runs the whole pipeline for a validated query.
pub fn compute_dashboard(
    series: &PriceSeries,
    query: &InvestmentQuery,
    tail_rows: usize,
) -> Result<Dashboard, QueryError> {
    query.validate_against(series)?;

    let result = evaluate(series, query);
    let projection =
        projection::project(series, result.resolved_date, query.amount, result.buy_price);
    debug!(
        resolved = %result.resolved_date,
        roi = result.roi_percent,
        points = projection.len(),
        "Computed dashboard"
    );

    Ok(Dashboard {
        query: *query,
        result,
        projection,
        recent: series.tail(tail_rows).to_vec(),
    })
}
