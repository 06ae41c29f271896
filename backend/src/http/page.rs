//! Static dashboard page.
//!
//! The page holds the selection state. On load it fetches `/v1/options` to
//! fill the selectors, then re-requests the line chart on every metric change
//! and the heatmap on every metric or year change. Charts are drawn with
//! Plotly.js from the payloads as returned.

pub const INDEX_HTML: &str = include_str!("../../assets/index.html");
