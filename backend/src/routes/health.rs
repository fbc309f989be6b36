//! Health check endpoints
//!
//! - /health - process is up
//! - /health/live - liveness probe
//! - /health/ready - readiness probe, checks the recipe database

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

const HEALTHY: &str = "healthy";
const UNHEALTHY: &str = "unhealthy";

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<CheckStatus>,
}

/// Status of an individual dependency
#[derive(Serialize)]
pub struct CheckStatus {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthResponse {
    fn simple(status: &'static str) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database: None,
        }
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::simple(HEALTHY))
}

pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse::simple("alive"))
}

/// Returns 503 while the database is unreachable
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database = match db::health_check(state.db()).await {
        Ok(()) => CheckStatus {
            status: HEALTHY,
            message: None,
        },
        Err(e) => CheckStatus {
            status: UNHEALTHY,
            message: Some(e.to_string()),
        },
    };

    let ready = database.status == HEALTHY;
    let response = HealthResponse {
        status: if ready { "ready" } else { "not_ready" },
        version: env!("CARGO_PKG_VERSION"),
        database: Some(database),
    };

    if ready {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
