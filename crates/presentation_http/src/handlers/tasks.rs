//! Specialized task handlers: summarize, explain, homework help

use application::TaskOutcome;
use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::{
    error::ApiError,
    handlers::AssistBody,
    state::AppState,
    validation::ValidatedJson,
};

/// Task response body
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    /// Generated text
    pub response: String,
    /// Model that served the request
    pub model_used: String,
    /// Task tag
    pub task_type: &'static str,
}

impl From<TaskOutcome> for TaskResponse {
    fn from(outcome: TaskOutcome) -> Self {
        Self {
            response: outcome.response,
            model_used: outcome.model_used,
            task_type: outcome.task_type,
        }
    }
}

/// Summarize the text supplied in `context`
#[instrument(skip(state, body), fields(context_len = body.context.len()))]
pub async fn summarize(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<AssistBody>,
) -> Result<Json<TaskResponse>, ApiError> {
    check_message(&body)?;
    let outcome = state.assist_service.summarize(&body.into()).await?;
    Ok(Json(outcome.into()))
}

/// Explain the concept named in `message`
#[instrument(skip(state, body), fields(message_len = body.message.len()))]
pub async fn explain(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<AssistBody>,
) -> Result<Json<TaskResponse>, ApiError> {
    check_message(&body)?;
    let outcome = state.assist_service.explain(&body.into()).await?;
    Ok(Json(outcome.into()))
}

/// Guide the student through an assignment without solving it
#[instrument(skip(state, body), fields(message_len = body.message.len()))]
pub async fn homework_help(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<AssistBody>,
) -> Result<Json<TaskResponse>, ApiError> {
    check_message(&body)?;
    let outcome = state.assist_service.homework_help(&body.into()).await?;
    Ok(Json(outcome.into()))
}

fn check_message(body: &AssistBody) -> Result<(), ApiError> {
    if body.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Message cannot be empty".to_string()));
    }
    Ok(())
}
