//! Calendar heatmap of daily activity.
//!
//! Each record of the selected year lands in one cell of a 7 x 53 grid: the
//! row is the weekday (Monday = 0) and the column is the ISO week number minus
//! one. The cell value is `log10(sum + 1)` of the selected metrics, so a fixed
//! color range of `[0, 5]` covers realistic counts for any year.
//!
//! Dates are binned by their ISO week even when that week belongs to the
//! neighbouring ISO year: early-January days may land in columns 51/52 and
//! share a cell with late-December days. Within a cell the last record
//! processed wins.

use chrono::{Datelike, NaiveDate};
use log::debug;

use super::line_chart::{CHART_HEIGHT, CHART_MARGIN};
use crate::api::HeatmapData;
use crate::dataset::Dataset;
use crate::models::{Metric, Record};

pub const WEEKDAYS: usize = 7;
pub const WEEKS: usize = 53;

pub const Z_MIN: f64 = 0.0;
pub const Z_MAX: f64 = 5.0;
pub const COLORSCALE: &str = "Blues";
pub const WEEKDAY_LABELS: [&str; WEEKDAYS] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const LINE_BREAK: &str = "<br>";

/// Fixed-size value and hover-text grids.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapGrid {
    values: [[f64; WEEKS]; WEEKDAYS],
    text: [[String; WEEKS]; WEEKDAYS],
}

impl Default for HeatmapGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl HeatmapGrid {
    /// All-zero grid with empty hover text.
    pub fn new() -> Self {
        Self {
            values: [[0.0; WEEKS]; WEEKDAYS],
            text: std::array::from_fn(|_| std::array::from_fn(|_| String::new())),
        }
    }

    /// `(weekday, week)` cell for a date.
    pub fn cell_for(date: NaiveDate) -> (usize, usize) {
        let weekday = date.weekday().num_days_from_monday() as usize;
        let week = date.iso_week().week() as usize - 1;
        (weekday, week)
    }

    /// Overwrite a cell.
    pub fn set(&mut self, weekday: usize, week: usize, value: f64, text: String) {
        self.values[weekday][week] = value;
        self.text[weekday][week] = text;
    }

    pub fn value(&self, weekday: usize, week: usize) -> f64 {
        self.values[weekday][week]
    }

    pub fn text(&self, weekday: usize, week: usize) -> &str {
        &self.text[weekday][week]
    }

    /// Cells that hold a record, i.e. have hover text.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..WEEKDAYS)
            .flat_map(|d| (0..WEEKS).map(move |w| (d, w)))
            .filter(move |&(d, w)| !self.text[d][w].is_empty())
    }

    /// Nested rows for serialization.
    pub fn into_rows(self) -> (Vec<Vec<f64>>, Vec<Vec<String>>) {
        let z = self.values.iter().map(|row| row.to_vec()).collect();
        let text = self.text.into_iter().map(Vec::from).collect();
        (z, text)
    }
}

/// Color intensity of a daily total.
pub fn intensity(total: f64) -> f64 {
    (total + 1.0).log10()
}

/// Hover text for one record: the ISO date, then one `label: value` line per
/// selected metric.
pub fn format_hover_text(record: &Record, metrics: &[Metric]) -> String {
    let mut info = format!("{}{}", record.date.format("%Y-%m-%d"), LINE_BREAK);
    for &metric in metrics {
        info.push_str(&format!(
            "{}: {}{}",
            metric.label(),
            record.value(metric),
            LINE_BREAK
        ));
    }
    info
}

/// Data recovered from a hover string.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverInfo {
    pub date: NaiveDate,
    pub values: Vec<(Metric, f64)>,
}

/// Inverse of [`format_hover_text`]. `None` for empty or malformed text.
pub fn parse_hover_text(text: &str) -> Option<HoverInfo> {
    let mut lines = text.split(LINE_BREAK).filter(|l| !l.is_empty());
    let date = NaiveDate::parse_from_str(lines.next()?, "%Y-%m-%d").ok()?;

    let values = lines
        .map(|line| {
            let (label, value) = line.split_once(": ")?;
            Some((Metric::from_label(label)?, value.parse::<f64>().ok()?))
        })
        .collect::<Option<Vec<_>>>()?;

    Some(HoverInfo { date, values })
}

/// Title naming the year and the selected metrics, e.g.
/// `2023年 [阅读次数, 阅读人数] 活跃度热力图`.
pub fn heatmap_title(year: i32, metrics: &[Metric]) -> String {
    let labels = metrics
        .iter()
        .map(|m| m.label())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}年 [{}] 活跃度热力图", year, labels)
}

/// Fill the grid from the records of `year`.
pub fn compute_heatmap_grid(dataset: &Dataset, year: i32, metrics: &[Metric]) -> HeatmapGrid {
    let mut grid = HeatmapGrid::new();
    for record in dataset.records_in_year(year) {
        let (weekday, week) = HeatmapGrid::cell_for(record.date);
        grid.set(
            weekday,
            week,
            intensity(record.sum(metrics)),
            format_hover_text(record, metrics),
        );
    }
    grid
}

/// Build the heatmap payload for `year`.
///
/// A year without records yields an all-zero grid.
pub fn build_heatmap(dataset: &Dataset, year: i32, metrics: &[Metric]) -> HeatmapData {
    let grid = compute_heatmap_grid(dataset, year, metrics);
    debug!(
        "Built heatmap for {}: {} filled cells",
        year,
        grid.filled_cells().count()
    );
    let (z, text) = grid.into_rows();

    HeatmapData {
        year,
        metrics: metrics.to_vec(),
        title: heatmap_title(year, metrics),
        z,
        text,
        x: (0..WEEKS as u32).collect(),
        y: (0..WEEKDAYS as u32).collect(),
        zmin: Z_MIN,
        zmax: Z_MAX,
        colorscale: COLORSCALE.to_string(),
        y_tick_labels: WEEKDAY_LABELS.iter().map(|s| s.to_string()).collect(),
        height: CHART_HEIGHT,
        margin: CHART_MARGIN,
    }
}

#[cfg(test)]
#[path = "heatmap_tests.rs"]
mod heatmap_tests;
