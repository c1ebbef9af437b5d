//! Chat handler

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::{
    error::ApiError,
    handlers::AssistBody,
    state::AppState,
    validation::ValidatedJson,
};

/// Chat response body
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Assistant response
    pub response: String,
    /// Model that served the request
    pub model_used: String,
    /// Inference time in milliseconds
    pub processing_time_ms: u64,
    /// Unix seconds at completion
    pub timestamp: i64,
}

/// Handle a general chat request
#[instrument(skip(state, body), fields(task_type = %body.task_type, message_len = body.message.len()))]
pub async fn chat(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<AssistBody>,
) -> Result<Json<ChatResponse>, ApiError> {
    if body.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Message cannot be empty".to_string()));
    }

    let outcome = state.assist_service.chat(&body.into()).await?;

    Ok(Json(ChatResponse {
        response: outcome.response,
        model_used: outcome.model_used,
        processing_time_ms: outcome.processing_time_ms,
        timestamp: outcome.timestamp,
    }))
}
