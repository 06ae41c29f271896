use chrono::{Datelike, NaiveDate};

use super::metric::{Metric, METRIC_COUNT};

/// One row of the export: a calendar day and its nine metric values.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub date: NaiveDate,
    values: [f64; METRIC_COUNT],
}

impl Record {
    /// Create a record with every metric at zero.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            values: [0.0; METRIC_COUNT],
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        self.set(metric, value);
        self
    }

    pub fn set(&mut self, metric: Metric, value: f64) {
        self.values[metric.index()] = value;
    }

    pub fn value(&self, metric: Metric) -> f64 {
        self.values[metric.index()]
    }

    /// Sum of the given metrics. Zero for an empty selection.
    pub fn sum(&self, metrics: &[Metric]) -> f64 {
        metrics.iter().map(|&m| self.value(m)).sum()
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }
}
