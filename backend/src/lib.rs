//! # WeChat Dashboard Backend
//!
//! Interactive dashboard over a CSV export of WeChat official-account
//! engagement metrics.
//!
//! The export is loaded once into an immutable in-memory [`dataset::Dataset`].
//! Two pure builders turn the dataset plus the current selection into chart
//! payloads, and an Axum server exposes them to a single dashboard page.
//!
//! ## Features
//!
//! - **Data Loading**: Parse the daily CSV export, tolerant of common date formats
//! - **Line Chart**: One series per selected metric, one point per day
//! - **Heatmap**: Weekday x ISO-week calendar of `log10(sum + 1)` for a year
//! - **HTTP API**: Dashboard page plus JSON endpoints for both charts
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`config`]: TOML file and environment configuration
//! - [`dataset`]: CSV loading and the read-only dataset
//! - [`models`]: Metric catalog and daily records
//! - [`services`]: Line chart and heatmap builders
//! - [`routes`]: Chart payload types and route names
//! - `http`: Axum-based HTTP server and request handlers

pub mod api;
pub mod config;

pub mod dataset;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
