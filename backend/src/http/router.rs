//! Router configuration for the dashboard.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::{heatmap::HEATMAP_ROUTE, landing::OPTIONS_ROUTE, line_chart::LINE_CHART_ROUTE};

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route(OPTIONS_ROUTE, get(handlers::get_options))
        .route(LINE_CHART_ROUTE, get(handlers::get_line_chart))
        .route(HEATMAP_ROUTE, get(handlers::get_heatmap))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let state = AppState::new(Arc::new(Dataset::default()), "Test");
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
