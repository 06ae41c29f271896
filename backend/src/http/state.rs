//! Application state for the HTTP server.

use std::sync::Arc;

use crate::dataset::Dataset;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only dataset loaded at startup
    pub dataset: Arc<Dataset>,
    /// Page heading
    pub title: Arc<str>,
}

impl AppState {
    /// Create a new application state around a loaded dataset.
    pub fn new(dataset: Arc<Dataset>, title: impl Into<Arc<str>>) -> Self {
        Self {
            dataset,
            title: title.into(),
        }
    }
}
