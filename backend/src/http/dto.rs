//! Data Transfer Objects for the HTTP API.
//!
//! Chart payloads are re-exported from the routes module since they already
//! derive Serialize/Deserialize. Query strings carry metric keys as a
//! comma-separated list.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Options
    DashboardOptions, MetricOption,
    // Heatmap
    HeatmapData,
    // Line chart
    ChartMargin, LineChartData, LineChartLayout, LineSeries,
};

/// Query parameters for the line chart endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LineChartQuery {
    /// Comma-separated metric keys. Absent means the default selection,
    /// present but empty means no metrics.
    #[serde(default)]
    pub metrics: Option<String>,
}

/// Query parameters for the heatmap endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HeatmapQuery {
    /// Year to plot (default: earliest year in the dataset)
    #[serde(default)]
    pub year: Option<i32>,
    /// Comma-separated metric keys, as for the line chart
    #[serde(default)]
    pub metrics: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of records loaded
    pub records: usize,
    /// Years covered by the dataset
    pub years: Vec<i32>,
}
