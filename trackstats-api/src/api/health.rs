//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Health check response
///
/// Liveness plus whether the startup load succeeded.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
    pub data_loaded: bool,
}

/// GET /health
///
/// Answers `ok` even when the dataset is absent; the service is up, only
/// degraded.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "trackstats-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data_loaded: state.dataset.is_loaded(),
    })
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
