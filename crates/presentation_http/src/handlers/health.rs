//! Health check handler

use application::HealthReport;
use axum::{Json, extract::State};

use crate::state::AppState;

/// Backend health check
///
/// Always returns 200; whether the backend is reachable is reported in the
/// body so monitoring can distinguish "service up, backend down" from
/// "service down".
pub async fn health_check(State(state): State<AppState>) -> Json<HealthReport> {
    Json(state.health_service.check().await)
}

#[cfg(test)]
mod tests {
    use application::HealthState;

    #[test]
    fn report_serializes_status_and_models() {
        let report = application::HealthReport {
            status: HealthState::Healthy,
            ollama_available: true,
            available_models: vec!["phi3:mini".to_string()],
            default_model: "phi3:mini".to_string(),
            timestamp: 1_735_000_000,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"ollama_available\":true"));
        assert!(json.contains("available_models"));
        assert!(json.contains("\"timestamp\":1735000000"));
    }

    #[test]
    fn degraded_report_serializes() {
        let report = application::HealthReport {
            status: HealthState::Degraded,
            ollama_available: false,
            available_models: Vec::new(),
            default_model: "phi3:mini".to_string(),
            timestamp: 1_735_000_000,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"status\":\"degraded\""));
        assert!(json.contains("\"available_models\":[]"));
    }
}
