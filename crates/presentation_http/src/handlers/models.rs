//! Model listing handler

use axum::{Json, extract::State};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Relay the backend's model listing verbatim
///
/// Unlike the health check this propagates backend failures, so callers can
/// tell "no models" apart from "backend unreachable".
#[instrument(skip(state))]
pub async fn list_models(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let payload = state.assist_service.models_payload().await?;
    Ok(Json(payload))
}
