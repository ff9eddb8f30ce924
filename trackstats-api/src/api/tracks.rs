//! Track sample and aggregate endpoints
//!
//! All three fail with 500 `{ "error": ... }` when the dataset is absent.

use std::collections::BTreeMap;

use axum::{extract::State, Json};

use crate::error::{ApiError, ApiResult};
use crate::query::{
    self, ArtistStreams, PlatformStats, TrackSample, SAMPLE_LIMIT, TOP_ARTISTS_LIMIT,
};
use crate::AppState;

/// GET /api/tracks
///
/// First 100 rows plus the full row count.
pub async fn get_tracks(State(state): State<AppState>) -> ApiResult<Json<TrackSample>> {
    let table = state.table()?;
    Ok(Json(query::sample(table, SAMPLE_LIMIT)))
}

/// GET /api/top-artists
///
/// Ten artists with the most summed Spotify streams.
pub async fn get_top_artists(State(state): State<AppState>) -> ApiResult<Json<Vec<ArtistStreams>>> {
    let table = state.table()?;
    let ranked = query::top_artists(table, TOP_ARTISTS_LIMIT)
        .map_err(|e| ApiError::query_fault("get_top_artists", e))?;
    Ok(Json(ranked))
}

/// GET /api/platform-comparison
pub async fn get_platform_comparison(
    State(state): State<AppState>,
) -> ApiResult<Json<BTreeMap<String, PlatformStats>>> {
    let table = state.table()?;
    Ok(Json(query::platform_summary(table)))
}
