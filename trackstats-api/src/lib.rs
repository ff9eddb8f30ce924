//! trackstats-api library - read-only analytics over a track statistics CSV
//!
//! The dataset is loaded once at startup and handed to the router as
//! immutable shared state; handlers only ever read it.

use std::any::Any;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::json;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::error;

pub mod api;
pub mod dataset;
pub mod error;
pub mod query;

pub use crate::error::{ApiError, ApiResult};

use dataset::{Dataset, TrackTable};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Dataset loaded at startup (read-only)
    pub dataset: Arc<Dataset>,
    /// Directory served at `/` and `/static`
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create new application state
    pub fn new(dataset: Dataset, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            dataset: Arc::new(dataset),
            static_dir: static_dir.into(),
        }
    }

    /// Loaded table, or `DataUnavailable` when the startup load failed
    pub fn table(&self) -> ApiResult<&TrackTable> {
        self.dataset.table().ok_or(ApiError::DataUnavailable)
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let routes = Router::new()
        .route("/api/tracks", get(api::get_tracks))
        .route("/api/top-artists", get(api::get_top_artists))
        .route("/api/platform-comparison", get(api::get_platform_comparison))
        .route("/api/debug/data-info", get(api::get_data_info));

    Router::new()
        .merge(routes)
        .merge(api::ui_routes(&state.static_dir))
        .merge(api::health_routes())
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        // Any origin may call the API
        .layer(CorsLayer::permissive())
}

/// Render a handler panic as the standard 500 error body
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    error!("Handler panicked: {}", details);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": details })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_panic_response_is_json_500() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "boom");
    }

    #[test]
    fn test_absent_dataset_table_is_unavailable() {
        let state = AppState::new(
            Dataset::Absent {
                data_file: "missing.csv".into(),
                reason: "File not found".into(),
            },
            "static",
        );
        assert!(matches!(state.table(), Err(ApiError::DataUnavailable)));
    }
}
