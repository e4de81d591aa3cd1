//! Line-driven loop that recomputes the dashboard for each new input.
//!
//! The price file is read once through the [`DatasetCache`]; every line after
//! that only reruns the calculation.

use super::ui;
use crate::core::config::AppConfig;
use crate::core::hindsight::compute_dashboard;
use crate::core::series::parse_date;
use crate::core::{Dashboard, DatasetCache, InvestmentQuery, PriceSeries};
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tracing::debug;

pub fn run<R: BufRead, W: Write>(
    cache: &DatasetCache,
    config: &AppConfig,
    input: R,
    out: &mut W,
) -> Result<()> {
    let series = cache.get()?;
    let (first, last) = series.date_range();
    writeln!(
        out,
        "Loaded {} records from {first} to {last}.\nEnter `<amount> <date>` (either may be omitted), or `q` to quit.",
        series.len()
    )?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if matches!(line, "q" | "quit" | "exit") {
            break;
        }

        match answer(series, config, line) {
            Ok(dashboard) => {
                writeln!(out, "{}", dashboard.display(&config.asset, &config.chart))?;
            }
            Err(e) => {
                debug!("Rejected input '{line}': {e}");
                writeln!(out, "{}", ui::style_text(&e.to_string(), ui::StyleType::Error))?;
            }
        }
    }
    Ok(())
}

fn answer(series: &PriceSeries, config: &AppConfig, line: &str) -> Result<Dashboard> {
    let query = parse_query(line, config)?;
    Ok(compute_dashboard(series, &query, config.tail_rows)?)
}

/// Reads an amount and/or a date from one line, in any order.
fn parse_query(line: &str, config: &AppConfig) -> Result<InvestmentQuery> {
    let mut amount = None;
    let mut date = None;

    for token in line.split_whitespace() {
        if let Some(d) = parse_date(token) {
            date = Some(d);
        } else if let Ok(a) = token.trim_start_matches('$').replace(',', "").parse::<f64>() {
            amount = Some(a);
        } else {
            bail!("Could not understand '{token}', expected an amount or a YYYY-MM-DD date");
        }
    }

    Ok(InvestmentQuery::new(
        amount.unwrap_or(config.default_amount),
        date.unwrap_or(config.default_date),
    )?)
}
