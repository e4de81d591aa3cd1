pub mod cli;
pub mod core;

use crate::cli::show::ShowOptions;
use crate::core::DatasetCache;
use crate::core::config::AppConfig;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

pub enum AppCommand {
    Show(ShowOptions),
    Interactive { data_path: Option<PathBuf> },
}

pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Hindsight Ledger starting...");
    let config = load_config(config_path)?;

    match command {
        AppCommand::Show(options) => {
            let mut stdout = std::io::stdout().lock();
            cli::show::run(&config, &options, &mut stdout)
        }
        AppCommand::Interactive { data_path } => {
            let cache = DatasetCache::new(data_path.unwrap_or_else(|| config.data_path.clone()));
            let stdin = std::io::stdin().lock();
            let mut stdout = std::io::stdout().lock();
            cli::interactive::run(&cache, &config, stdin, &mut stdout)
        }
    }
}
