//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::Metric;
pub use crate::routes::heatmap::HeatmapData;
pub use crate::routes::landing::DashboardOptions;
pub use crate::routes::landing::MetricOption;
pub use crate::routes::line_chart::ChartMargin;
pub use crate::routes::line_chart::LineChartData;
pub use crate::routes::line_chart::LineChartLayout;
pub use crate::routes::line_chart::LineSeries;

use crate::dataset::Dataset;
use crate::models::DEFAULT_SELECTION;

/// Selector options and defaults for a loaded dataset.
pub fn dashboard_options(dataset: &Dataset, title: &str) -> DashboardOptions {
    DashboardOptions {
        title: title.to_string(),
        metrics: Metric::ALL.into_iter().map(MetricOption::from).collect(),
        years: dataset.years().to_vec(),
        default_metrics: DEFAULT_SELECTION.to_vec(),
        default_year: dataset.earliest_year(),
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
