//! Historical price series and the `~` delimited loader

use crate::core::error::LoadError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Field separator used by the price files.
pub const DELIMITER: u8 = b'~';

const DATE_COLUMN: &str = "DATE";
const CLOSE_COLUMN: &str = "CLOSE";

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%b-%Y"];

/// A single daily close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub close: f64,
}

impl PriceRecord {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// A non-empty sequence of records in ascending date order.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    records: Vec<PriceRecord>,
}

impl PriceSeries {
    /// Builds a series, sorting records by date. Records sharing a date keep
    /// their input order.
    pub fn new(mut records: Vec<PriceRecord>) -> Result<Self, LoadError> {
        if records.is_empty() {
            return Err(LoadError::Empty);
        }
        records.sort_by_key(|r| r.date);
        Ok(Self { records })
    }

    /// Reads a series from the file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        debug!("Opening price data: {}", path.display());
        let file = File::open(path).map_err(|source| LoadError::DataUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let series = Self::from_reader(file)?;
        info!(
            records = series.len(),
            first = %series.first().date,
            last = %series.last().date,
            "Loaded price data from {}",
            path.display()
        );
        Ok(series)
    }

    /// Reads a series from any `~` delimited source with a header line.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .quoting(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let date_idx = column_index(&headers, DATE_COLUMN)?;
        let close_idx = column_index(&headers, CLOSE_COLUMN)?;
        debug!(date_idx, close_idx, "Resolved column positions");

        let mut records = Vec::new();
        for (i, row) in rdr.records().enumerate() {
            let row = row?;
            // Header is line 1.
            let line = i + 2;
            if row.iter().all(str::is_empty) {
                continue;
            }
            records.push(parse_row(&row, date_idx, close_idx, line)?);
        }

        Self::new(records)
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> &PriceRecord {
        &self.records[0]
    }

    pub fn last(&self) -> &PriceRecord {
        &self.records[self.records.len() - 1]
    }

    /// Earliest and latest dates, the valid range for a purchase date.
    pub fn date_range(&self) -> (NaiveDate, NaiveDate) {
        (self.first().date, self.last().date)
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        let (first, last) = self.date_range();
        first <= date && date <= last
    }

    /// Records dated on or after `date`.
    pub fn since(&self, date: NaiveDate) -> &[PriceRecord] {
        let start = self.records.partition_point(|r| r.date < date);
        &self.records[start..]
    }

    /// The last `n` records, or all of them when there are fewer.
    pub fn tail(&self, n: usize) -> &[PriceRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }
}

fn column_index(headers: &StringRecord, name: &'static str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or(LoadError::MissingColumn(name))
}

fn parse_row(
    row: &StringRecord,
    date_idx: usize,
    close_idx: usize,
    line: usize,
) -> Result<PriceRecord, LoadError> {
    let field = |idx: usize, name: &str| {
        row.get(idx).ok_or_else(|| LoadError::InvalidRow {
            line,
            reason: format!("missing {name} field"),
        })
    };

    let raw_date = field(date_idx, DATE_COLUMN)?;
    let date = parse_date(raw_date).ok_or_else(|| LoadError::InvalidRow {
        line,
        reason: format!("unrecognised date '{raw_date}'"),
    })?;

    let raw_close = field(close_idx, CLOSE_COLUMN)?;
    let close = parse_close(raw_close).ok_or_else(|| LoadError::InvalidRow {
        line,
        reason: format!("invalid close price '{raw_close}'"),
    })?;

    Ok(PriceRecord { date, close })
}

/// Parses the date forms seen in exported price files. Timestamps keep only
/// their date part.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

fn parse_close(s: &str) -> Option<f64> {
    let cleaned: String = s.chars().filter(|c| *c != ',').collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
