//! Service layer for chart computation.
//!
//! Services are pure functions of the loaded dataset and the current
//! selection. They hold no state between calls; the HTTP layer calls them on
//! every selection change.

pub mod heatmap;

pub mod line_chart;

pub use heatmap::{build_heatmap, compute_heatmap_grid, parse_hover_text, HeatmapGrid, HoverInfo};
pub use line_chart::build_line_chart;
