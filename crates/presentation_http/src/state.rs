//! Application state shared across handlers

use std::sync::Arc;

use application::{AssistService, HealthService};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Assistance service for chat and task endpoints
    pub assist_service: Arc<AssistService>,
    /// Health service for backend liveness reporting
    pub health_service: Arc<HealthService>,
    /// Default model name, reported by the info endpoint
    pub default_model: String,
}
