//! HTTP handlers for the dashboard.
//!
//! Each handler corresponds to an endpoint and delegates to the service layer.
//! The builders are cheap in-memory transforms, so they run inline on the
//! request task.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
    Json,
};

use super::dto::{HealthResponse, HeatmapQuery, LineChartQuery};
use super::error::AppError;
use super::page::INDEX_HTML;
use super::state::AppState;
use crate::api::{dashboard_options, DashboardOptions, HeatmapData, LineChartData};
use crate::models::{parse_metric_list, Metric, DEFAULT_SELECTION};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Resolve the `metrics` query value into a selection.
pub fn resolve_metrics(raw: Option<&str>) -> Result<Vec<Metric>, AppError> {
    match raw {
        None => Ok(DEFAULT_SELECTION.to_vec()),
        Some(list) => Ok(parse_metric_list(list)?),
    }
}

// =============================================================================
// Page
// =============================================================================

/// GET /
///
/// The dashboard page. Selectors and charts are populated from the JSON API.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: state.dataset.len(),
        years: state.dataset.years().to_vec(),
    }))
}

// =============================================================================
// Visualization Endpoints
// =============================================================================

/// GET /v1/options
///
/// Metric catalog, available years and default selection.
pub async fn get_options(State(state): State<AppState>) -> HandlerResult<DashboardOptions> {
    Ok(Json(dashboard_options(&state.dataset, &state.title)))
}

/// GET /v1/line-chart?metrics=read_count,read_users
pub async fn get_line_chart(
    State(state): State<AppState>,
    query: Result<Query<LineChartQuery>, QueryRejection>,
) -> HandlerResult<LineChartData> {
    let Query(query) = query?;
    let metrics = resolve_metrics(query.metrics.as_deref())?;
    tracing::debug!(?metrics, "line chart requested");

    Ok(Json(services::build_line_chart(&state.dataset, &metrics)))
}

/// GET /v1/heatmap?year=2023&metrics=read_count,read_users
pub async fn get_heatmap(
    State(state): State<AppState>,
    query: Result<Query<HeatmapQuery>, QueryRejection>,
) -> HandlerResult<HeatmapData> {
    let Query(query) = query?;
    let metrics = resolve_metrics(query.metrics.as_deref())?;
    let year = match query.year {
        Some(year) if state.dataset.contains_year(year) => year,
        Some(year) => {
            return Err(AppError::BadRequest(format!(
                "Year {} is not present in the dataset",
                year
            )))
        }
        None => state
            .dataset
            .earliest_year()
            .ok_or_else(|| AppError::NotFound("Dataset has no records".to_string()))?,
    };
    tracing::debug!(year, ?metrics, "heatmap requested");

    Ok(Json(services::build_heatmap(&state.dataset, year, &metrics)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_metrics_default() {
        assert_eq!(
            resolve_metrics(None).unwrap(),
            vec![Metric::ReadCount, Metric::ReadUsers]
        );
    }

    #[test]
    fn test_resolve_metrics_empty() {
        assert!(resolve_metrics(Some("")).unwrap().is_empty());
    }

    #[test]
    fn test_resolve_metrics_unknown() {
        assert!(matches!(
            resolve_metrics(Some("read_count,bogus")),
            Err(AppError::BadRequest(_))
        ));
    }
}
