pub mod heatmap;
pub mod landing;
pub mod line_chart;
