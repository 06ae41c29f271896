//! CSV loader for the WeChat engagement export.
//!
//! The export has one row per day, a date column and the nine metric columns.
//! Columns are matched by header name, so column order and extra columns do
//! not matter.

use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::{DatasetError, DatasetResult};
use super::Dataset;
use crate::models::{Metric, Record, METRIC_COUNT};

/// Header of the date column.
pub const DATE_COLUMN: &str = "日期";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d", "%Y年%m月%d日"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y/%m/%d %H:%M:%S"];

/// Load the dataset from a CSV file on disk.
pub fn load_csv<P: AsRef<Path>>(path: P) -> DatasetResult<Dataset> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = from_reader(file)?;
    match (dataset.years().first(), dataset.years().last()) {
        (Some(first), Some(last)) => info!(
            "Loaded {} records from {} (years {}-{})",
            dataset.len(),
            path.display(),
            first,
            last
        ),
        _ => info!("Loaded empty dataset from {}", path.display()),
    }
    Ok(dataset)
}

/// Load the dataset from any CSV byte source.
pub fn from_reader<R: Read>(reader: R) -> DatasetResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let layout = ColumnLayout::resolve(rdr.headers()?)?;
    debug!("Resolved CSV layout: {:?}", layout);

    let mut records = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let row = row?;
        // Line 1 is the header.
        let line = row.position().map(|p| p.line()).unwrap_or(i as u64 + 2);
        records.push(layout.parse_row(&row, line)?);
    }

    Ok(Dataset::from_records(records))
}

/// Column positions of the date and metric fields.
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    date: usize,
    metrics: [usize; METRIC_COUNT],
}

impl ColumnLayout {
    fn resolve(headers: &csv::StringRecord) -> DatasetResult<Self> {
        let names: Vec<&str> = headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim())
            .collect();

        let find = |column: &str| {
            names
                .iter()
                .position(|name| *name == column)
                .ok_or_else(|| DatasetError::MissingColumn {
                    column: column.to_string(),
                })
        };

        let date = find(DATE_COLUMN)?;
        let mut metrics = [0usize; METRIC_COUNT];
        for metric in Metric::ALL {
            metrics[metric.index()] = find(metric.column())?;
        }

        Ok(Self { date, metrics })
    }

    fn parse_row(&self, row: &csv::StringRecord, line: u64) -> DatasetResult<Record> {
        let raw_date = row.get(self.date).unwrap_or("");
        let date = parse_date(raw_date).ok_or_else(|| DatasetError::InvalidDate {
            value: raw_date.to_string(),
            line,
        })?;

        let mut record = Record::new(date);
        for metric in Metric::ALL {
            let raw = row.get(self.metrics[metric.index()]).unwrap_or("");
            let value = parse_number(raw).ok_or_else(|| DatasetError::InvalidNumber {
                value: raw.to_string(),
                column: metric.column().to_string(),
                line,
            })?;
            record.set(metric, value);
        }
        Ok(record)
    }
}

/// Parse a date cell in any of the formats the export has been seen to use.
/// Datetimes keep only their calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Parse a metric cell. Thousands separators are ignored and an empty cell
/// counts as zero.
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Some(0.0);
    }
    cleaned.parse::<f64>().ok()
}
