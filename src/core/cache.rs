use crate::core::error::LoadError;
use crate::core::series::PriceSeries;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

/// Loads a price file on first access and hands out the same series after.
///
/// A failed load is not remembered, so a later call retries the read.
pub struct DatasetCache {
    path: PathBuf,
    series: OnceLock<PriceSeries>,
}

impl DatasetCache {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            series: OnceLock::new(),
        }
    }

    /// Wraps an already loaded series.
    pub fn from_series<P: Into<PathBuf>>(path: P, series: PriceSeries) -> Self {
        let cache = Self::new(path);
        let _ = cache.series.set(series);
        cache
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.series.get().is_some()
    }

    pub fn get(&self) -> Result<&PriceSeries, LoadError> {
        if let Some(series) = self.series.get() {
            debug!("Cache HIT");
            return Ok(series);
        }
        debug!("Cache MISS");
        let loaded = PriceSeries::load(&self.path)?;
        Ok(self.series.get_or_init(|| loaded))
    }
}
