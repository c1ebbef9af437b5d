//! Service info handler

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

/// Service info response
#[derive(Debug, Clone, Serialize)]
pub struct InfoResponse {
    pub service: String,
    pub status: String,
    pub version: String,
    pub model: String,
    pub provider: String,
}

/// Service identity - always answers, no backend probe involved
pub async fn service_info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        service: "StudyRelay student assistant".to_string(),
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.default_model.clone(),
        provider: "Ollama".to_string(),
    })
}
