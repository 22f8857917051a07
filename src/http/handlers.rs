//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::info;

use super::dto::{ChartQuery, HealthResponse, InitResponse};
use super::error::AppError;
use super::state::AppState;
use crate::api::{LaunchStatusChart, LaunchTimelineChart, MoonPhaseSuccessChart};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the
/// repository is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Ingestion
// =============================================================================

/// GET /v1/charts/available-years
///
/// Years with launch data, newest first. Falls back to 1957..=today on
/// upstream failure, so this endpoint never errors.
pub async fn available_years(State(state): State<AppState>) -> HandlerResult<Vec<i32>> {
    let years = state.launch_client.available_years().await;
    Ok(Json(years))
}

/// POST /v1/charts/init/{year}
///
/// Ingest moon phases and launches for a year. Idempotent: years already
/// populated are not fetched again. Must run before the chart endpoints
/// return data for that year.
pub async fn init_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> HandlerResult<InitResponse> {
    info!(year, "initializing data");

    let moon_phases = state
        .moon_client
        .fetch_and_store(state.repository.as_ref(), year)
        .await?;
    let launches = state
        .launch_client
        .fetch_and_store(state.repository.as_ref(), year)
        .await?;

    Ok(Json(InitResponse {
        year,
        moon_phases_count: moon_phases.len(),
        launches_count: launches.len(),
        message: format!("Data for {} initialized successfully", year),
    }))
}

// =============================================================================
// Chart Endpoints
// =============================================================================

/// GET /v1/charts/moon-phase-success?year=2025
pub async fn moon_phase_success(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> HandlerResult<MoonPhaseSuccessChart> {
    let year = query.year.unwrap_or(state.config.charts.default_year);
    let chart = services::get_moon_phase_success(state.repository.as_ref(), year).await?;
    Ok(Json(chart))
}

/// GET /v1/charts/launch-status?year=2025
pub async fn launch_status(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> HandlerResult<LaunchStatusChart> {
    let year = query.year.unwrap_or(state.config.charts.default_year);
    let chart = services::get_launch_status_distribution(state.repository.as_ref(), year).await?;
    Ok(Json(chart))
}

/// GET /v1/charts/launch-timeline?year=2025
pub async fn launch_timeline(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> HandlerResult<LaunchTimelineChart> {
    let year = query.year.unwrap_or(state.config.charts.default_year);
    let chart = services::get_launch_timeline(
        state.repository.as_ref(),
        year,
        &state.config.charts.month_labels,
    )
    .await?;
    Ok(Json(chart))
}
