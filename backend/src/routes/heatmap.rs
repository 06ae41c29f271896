use serde::{Deserialize, Serialize};

use super::line_chart::ChartMargin;
use crate::models::Metric;

// =========================================================
// Heatmap types
// =========================================================

/// Heatmap payload for one year.
///
/// `z` and `text` are 7 rows (Monday first) by 53 columns (ISO week - 1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapData {
    pub year: i32,
    pub metrics: Vec<Metric>,
    pub title: String,
    pub z: Vec<Vec<f64>>,
    pub text: Vec<Vec<String>>,
    pub x: Vec<u32>,
    pub y: Vec<u32>,
    pub zmin: f64,
    pub zmax: f64,
    pub colorscale: String,
    pub y_tick_labels: Vec<String>,
    pub height: u32,
    pub margin: ChartMargin,
}

/// Route serving [`HeatmapData`].
pub const HEATMAP_ROUTE: &str = "/v1/heatmap";
