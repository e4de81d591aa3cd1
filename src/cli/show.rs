use crate::core::config::AppConfig;
use crate::core::hindsight::compute_dashboard;
use crate::core::{Dashboard, DatasetCache, InvestmentQuery};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Inputs for a single dashboard render. Unset fields fall back to the config.
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    pub data_path: Option<PathBuf>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub tail: Option<usize>,
    pub json: bool,
}

impl ShowOptions {
    pub fn data_path(&self, config: &AppConfig) -> PathBuf {
        self.data_path
            .clone()
            .unwrap_or_else(|| config.data_path.clone())
    }
}

pub fn run<W: Write>(config: &AppConfig, options: &ShowOptions, out: &mut W) -> Result<()> {
    let cache = DatasetCache::new(options.data_path(config));
    let dashboard = build(&cache, config, options)?;

    if options.json {
        let json = serde_json::to_string_pretty(&dashboard)
            .context("Failed to serialize dashboard")?;
        writeln!(out, "{json}")?;
    } else {
        writeln!(out, "{}", dashboard.display(&config.asset, &config.chart))?;
    }
    Ok(())
}

pub fn build(cache: &DatasetCache, config: &AppConfig, options: &ShowOptions) -> Result<Dashboard> {
    let series = cache.get()?;

    let amount = options.amount.unwrap_or(config.default_amount);
    let date = options.date.unwrap_or(config.default_date);
    let tail = options.tail.unwrap_or(config.tail_rows);
    debug!(amount, %date, tail, "Computing dashboard");

    let query = InvestmentQuery::new(amount, date)?;
    let dashboard = compute_dashboard(series, &query, tail)?;
    info!(
        resolved = %dashboard.result.resolved_date,
        value = dashboard.result.current_value,
        "Calculated hypothetical return"
    );
    Ok(dashboard)
}
