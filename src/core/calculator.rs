//! Return calculations for a single hypothetical purchase
use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use rust_decimal::{Decimal, prelude::*};
use rust_finprim::rate::cagr;
use serde::Serialize;
use tracing::debug;

/// Outcome of buying `amount` worth of an asset at one price and valuing it
/// at another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Returns {
    pub units_owned: f64,
    pub current_value: f64,
    pub roi_percent: f64,
}

impl Returns {
    const ZERO: Returns = Returns {
        units_owned: 0.0,
        current_value: 0.0,
        roi_percent: 0.0,
    };
}

/// Units bought for `amount` at `buy_price`. Zero when the price is not
/// positive.
pub fn units_for(amount: f64, buy_price: f64) -> f64 {
    if buy_price > 0.0 {
        amount / buy_price
    } else {
        0.0
    }
}

/// Computes units, value and ROI. A non-positive buy price yields all zeros
/// instead of an error.
pub fn calculate_returns(amount: f64, buy_price: f64, current_price: f64) -> Returns {
    if buy_price <= 0.0 {
        debug!(buy_price, "Non-positive buy price, returning zeroed result");
        return Returns::ZERO;
    }

    let units_owned = units_for(amount, buy_price);
    let current_value = units_owned * current_price;
    let roi_percent = ((current_value - amount) / amount) * 100.0;
    Returns {
        units_owned,
        current_value,
        roi_percent,
    }
}

/// Holdings younger than this are not annualized.
pub const MIN_ANNUALIZED_DAYS: i64 = 365;

/// Compound annual growth rate in percent from `amount` to `current_value`
/// between two dates. `None` when the holding is shorter than a year or either
/// balance is not positive.
pub fn annualized_return(
    amount: f64,
    current_value: f64,
    purchased: NaiveDate,
    valued: NaiveDate,
) -> Option<f64> {
    let days = (valued - purchased).num_days();
    if days < MIN_ANNUALIZED_DAYS || amount <= 0.0 || current_value <= 0.0 {
        return None;
    }

    match compute_cagr(amount, current_value, days as f64 / 365.0) {
        Ok(percentage) => Some(percentage),
        Err(e) => {
            debug!("CAGR calculation failed: {e}");
            None
        }
    }
}

fn compute_cagr(amount: f64, current_value: f64, duration_years: f64) -> Result<f64> {
    let begin_bal = Decimal::from_f64(amount).ok_or_else(|| anyhow!("Invalid amount"))?;
    let end_bal =
        Decimal::from_f64(current_value).ok_or_else(|| anyhow!("Invalid current value"))?;
    let n_years = Decimal::from_f64(duration_years).ok_or_else(|| anyhow!("Invalid duration"))?;

    if n_years.is_zero() {
        return Err(anyhow!("Holding period rounds to zero"));
    }

    let rate = cagr(begin_bal, end_bal, n_years);
    let percentage = (rate * Decimal::from(100))
        .to_f64()
        .ok_or_else(|| anyhow!("CAGR percentage conversion failed"))?;
    debug!("cagr: {begin_bal}, {end_bal}, {n_years} = {rate}, {percentage}");
    Ok(percentage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_in_value() {
        let r = calculate_returns(100.0, 100.0, 150.0);
        assert_eq!(r.units_owned, 1.0);
        assert_eq!(r.current_value, 150.0);
        assert_eq!(r.roi_percent, 50.0);
    }

    #[test]
    fn loss_gives_negative_roi() {
        let r = calculate_returns(200.0, 50.0, 25.0);
        assert_eq!(r.units_owned, 4.0);
        assert_eq!(r.current_value, 100.0);
        assert_eq!(r.roi_percent, -50.0);
    }

    #[test]
    fn worthless_asset_loses_everything() {
        let r = calculate_returns(100.0, 10.0, 0.0);
        assert_eq!(r.current_value, 0.0);
        assert_eq!(r.roi_percent, -100.0);
    }

    #[test]
    fn zero_buy_price_yields_zeros() {
        for amount in [1.0, 100.0, 1e9] {
            assert_eq!(calculate_returns(amount, 0.0, 150.0), Returns::ZERO);
        }
        assert_eq!(calculate_returns(100.0, -5.0, 150.0), Returns::ZERO);
        assert_eq!(units_for(100.0, 0.0), 0.0);
    }

    #[test]
    fn fractional_units_are_not_rounded() {
        let r = calculate_returns(100.0, 19_000.0, 38_000.0);
        assert!((r.units_owned - 0.005263157894736842).abs() < 1e-15);
        assert!((r.current_value - 200.0).abs() < 1e-9);
    }

    #[test]
    fn annualized_return_over_one_year() {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let end = start + chrono::Duration::days(365);
        let rate = annualized_return(100.0, 125.0, start, end).unwrap();
        assert!((rate - 25.0).abs() < 0.1);
    }

    #[test]
    fn annualized_return_needs_a_holding_period() {
        let day = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(annualized_return(100.0, 125.0, day, day), None);
        assert_eq!(
            annualized_return(100.0, 5000.0, day, day + chrono::Duration::days(200)),
            None
        );
        assert_eq!(
            annualized_return(100.0, 0.0, day, day + chrono::Duration::days(400)),
            None
        );
    }
}
