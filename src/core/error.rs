//! Error types for the core pipeline

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while reading a price series.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file is missing or cannot be opened.
    #[error("Price data not available at {}: {source}", path.display())]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Required column '{0}' not found in header")]
    MissingColumn(&'static str),
    #[error("Invalid record on line {line}: {reason}")]
    InvalidRow { line: usize, reason: String },
    #[error("Price data contains no records")]
    Empty,
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Rejected user input for a single calculation.
#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("Amount must be at least {min:.2}, got {amount}")]
    AmountTooSmall { amount: f64, min: f64 },
    #[error("Purchase date {date} is outside the available range {first} to {last}")]
    DateOutOfRange {
        date: NaiveDate,
        first: NaiveDate,
        last: NaiveDate,
    },
}
