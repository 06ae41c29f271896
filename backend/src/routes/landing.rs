use serde::{Deserialize, Serialize};

use crate::models::Metric;

/// Dropdown entry for one metric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricOption {
    pub key: Metric,
    pub label: String,
}

impl From<Metric> for MetricOption {
    fn from(metric: Metric) -> Self {
        Self {
            key: metric,
            label: metric.label().to_string(),
        }
    }
}

/// Everything the page needs to build its selectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardOptions {
    pub title: String,
    pub metrics: Vec<MetricOption>,
    pub years: Vec<i32>,
    pub default_metrics: Vec<Metric>,
    pub default_year: Option<i32>,
}

/// Route serving [`DashboardOptions`].
pub const OPTIONS_ROUTE: &str = "/v1/options";
