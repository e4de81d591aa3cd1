use crate::core::hindsight::{DEFAULT_AMOUNT, default_purchase_date};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AssetConfig {
    pub name: String,
    pub symbol: String,
    pub glyph: Option<String>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        AssetConfig {
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
            glyph: Some("₿".to_string()),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChartConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            width: 72,
            height: 16,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub asset: AssetConfig,
    pub default_amount: f64,
    pub default_date: NaiveDate,
    pub tail_rows: usize,
    pub chart: ChartConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_path: PathBuf::from("bitcoin_data.csv"),
            asset: AssetConfig::default(),
            default_amount: DEFAULT_AMOUNT,
            default_date: default_purchase_date(),
            tail_rows: 10,
            chart: ChartConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads the config at the default location, falling back to defaults
    /// when no file has been created there.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "hindsight", "hindsight")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
