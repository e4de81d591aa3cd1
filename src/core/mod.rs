//! Core calculation types and the dataset they run over

pub mod cache;
pub mod calculator;
pub mod config;
pub mod error;
pub mod hindsight;
pub mod log;
pub mod projection;
pub mod resolver;
pub mod series;

// Re-export main types for cleaner imports
pub use cache::DatasetCache;
pub use error::{LoadError, QueryError};
pub use hindsight::{Dashboard, InvestmentQuery, InvestmentResult};
pub use projection::ProjectionPoint;
pub use series::{PriceRecord, PriceSeries};
