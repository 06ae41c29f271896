//! In-memory dataset of daily engagement records.
//!
//! The dataset is loaded once at startup and never mutated afterwards. The
//! server shares it through an `Arc` and hands a reference to every chart
//! builder, so concurrent requests need no locking.

pub mod error;
pub mod loader;


pub use error::{DatasetError, DatasetResult};
pub use loader::{from_reader, load_csv, parse_date, parse_number, DATE_COLUMN};

use std::collections::BTreeSet;
use std::path::Path;

use crate::models::Record;

/// Ordered sequence of records plus the distinct years they cover.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    years: Vec<i32>,
}

impl Dataset {
    /// Build a dataset from records, keeping their order.
    ///
    /// Duplicate dates are kept as-is; consumers see them in insertion order.
    pub fn from_records(records: Vec<Record>) -> Self {
        let years: BTreeSet<i32> = records.iter().map(Record::year).collect();
        Self {
            records,
            years: years.into_iter().collect(),
        }
    }

    /// Load from a CSV file. See [`loader::load_csv`].
    pub fn load<P: AsRef<Path>>(path: P) -> DatasetResult<Self> {
        load_csv(path)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years present, ascending.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Default year for the year selector.
    pub fn earliest_year(&self) -> Option<i32> {
        self.years.first().copied()
    }

    pub fn contains_year(&self, year: i32) -> bool {
        self.years.binary_search(&year).is_ok()
    }

    /// Records dated in `year`, in dataset order.
    pub fn records_in_year(&self, year: i32) -> impl Iterator<Item = &Record> + '_ {
        self.records.iter().filter(move |r| r.year() == year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(y: i32, m: u32, d: u32) -> Record {
        Record::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_years_sorted_and_distinct() {
        let dataset = Dataset::from_records(vec![
            record(2023, 3, 1),
            record(2021, 5, 1),
            record(2023, 1, 1),
            record(2022, 7, 9),
        ]);
        assert_eq!(dataset.years(), &[2021, 2022, 2023]);
        assert_eq!(dataset.earliest_year(), Some(2021));
    }

    #[test]
    fn test_records_keep_order() {
        let dataset = Dataset::from_records(vec![record(2023, 3, 1), record(2021, 5, 1)]);
        assert_eq!(dataset.records()[0].year(), 2023);
        assert_eq!(dataset.records()[1].year(), 2021);
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_records_in_year() {
        let dataset = Dataset::from_records(vec![
            record(2022, 12, 31),
            record(2023, 1, 1),
            record(2023, 1, 2),
        ]);
        assert_eq!(dataset.records_in_year(2023).count(), 2);
        assert_eq!(dataset.records_in_year(2022).count(), 1);
        assert_eq!(dataset.records_in_year(2020).count(), 0);
        assert!(dataset.contains_year(2022));
        assert!(!dataset.contains_year(2020));
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.years().is_empty());
        assert_eq!(dataset.earliest_year(), None);
    }
}
