//! Data loading diagnostics

use axum::{extract::State, Json};

use crate::query::{self, DebugInfo};
use crate::AppState;

/// GET /api/debug/data-info
///
/// Always 200: when the dataset is absent the body itself carries
/// `status: "error"` along with the file and directory context.
pub async fn get_data_info(State(state): State<AppState>) -> Json<DebugInfo> {
    Json(query::debug_info(&state.dataset))
}
