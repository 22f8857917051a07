//! Request/response DTOs specific to the HTTP layer.
//!
//! Chart payloads live in [`crate::api`]; these are the envelope types
//! for health, ingestion and year queries.

use serde::{Deserialize, Serialize};

/// Response for GET /health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
}

/// Response for POST /v1/charts/init/{year}.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitResponse {
    pub year: i32,
    pub moon_phases_count: usize,
    pub launches_count: usize,
    pub message: String,
}

/// Query parameters for the chart endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartQuery {
    /// Year of the data; falls back to the configured default year.
    pub year: Option<i32>,
}
