//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Service identity and health
        .route("/", get(handlers::info::service_info))
        .route("/health", get(handlers::health::health_check))
        // Assistance API
        .route("/api/chat", post(handlers::chat::chat))
        .route("/api/summarize", post(handlers::tasks::summarize))
        .route("/api/explain", post(handlers::tasks::explain))
        .route("/api/homework-help", post(handlers::tasks::homework_help))
        // Model listing
        .route("/api/models", get(handlers::models::list_models))
        // Attach state
        .with_state(state)
}
