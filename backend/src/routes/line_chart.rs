use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Metric;

// =========================================================
// Line chart types
// =========================================================

/// Plot margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartMargin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

impl ChartMargin {
    pub const fn uniform(px: u32) -> Self {
        Self {
            l: px,
            r: px,
            t: px,
            b: px,
        }
    }
}

/// One line per selected metric, one point per record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineSeries {
    pub metric: Metric,
    pub name: String,
    pub mode: String,
    pub x: Vec<NaiveDate>,
    pub y: Vec<f64>,
}

/// Fixed layout of the line chart panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineChartLayout {
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub height: u32,
    pub margin: ChartMargin,
}

/// Line chart payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineChartData {
    pub series: Vec<LineSeries>,
    pub layout: LineChartLayout,
}

/// Route serving [`LineChartData`].
pub const LINE_CHART_ROUTE: &str = "/v1/line-chart";
