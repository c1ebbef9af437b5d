//! Backend liveness reporting

use std::{fmt, sync::Arc};

use ai_core::InferenceEngine;
use chrono::Utc;
use serde::Serialize;
use tracing::{instrument, warn};

/// Reachability of the inference backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthState {
    Healthy,
    Degraded,
}

impl HealthState {
    /// Label used in responses and logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Degraded => "degraded",
        }
    }
}

/// Snapshot of the service's view of its backend
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthState,
    pub ollama_available: bool,
    pub available_models: Vec<String>,
    pub default_model: String,
    /// Unix seconds at report assembly
    pub timestamp: i64,
}

/// Probes the inference backend on demand; no cached state
pub struct HealthService {
    engine: Arc<dyn InferenceEngine>,
}

impl fmt::Debug for HealthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HealthService").finish_non_exhaustive()
    }
}

impl HealthService {
    /// Create a health service over the given engine
    pub fn new(engine: Arc<dyn InferenceEngine>) -> Self {
        Self { engine }
    }

    /// Probe the backend and list its models
    ///
    /// Never fails: an unreachable backend yields a degraded report, not an
    /// error. Callers always get a 200-style answer with the truth inside.
    #[instrument(skip(self))]
    pub async fn check(&self) -> HealthReport {
        let ollama_available = self.engine.is_available().await;
        let available_models = if ollama_available {
            self.engine.list_models().await
        } else {
            Vec::new()
        };

        let status = if ollama_available {
            HealthState::Healthy
        } else {
            warn!("Inference backend unreachable, reporting degraded");
            HealthState::Degraded
        };

        HealthReport {
            status,
            ollama_available,
            available_models,
            default_model: self.engine.default_model().to_string(),
            timestamp: Utc::now().timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use ai_core::{GenerationRequest, InferenceError};
    use mockall::mock;

    use super::*;

    mock! {
        pub Engine {}

        #[async_trait::async_trait]
        impl InferenceEngine for Engine {
            async fn generate(&self, request: GenerationRequest) -> Result<String, InferenceError>;
            async fn is_available(&self) -> bool;
            async fn list_models(&self) -> Vec<String>;
            async fn models_payload(&self) -> Result<serde_json::Value, InferenceError>;
            fn default_model(&self) -> &'static str;
        }
    }

    #[tokio::test]
    async fn healthy_backend_reports_models() {
        let mut mock = MockEngine::new();
        mock.expect_is_available().returning(|| true);
        mock.expect_list_models()
            .returning(|| vec!["phi3:mini".to_string(), "codellama:7b".to_string()]);
        mock.expect_default_model().return_const("phi3:mini");

        let report = HealthService::new(Arc::new(mock)).check().await;

        assert_eq!(report.status, HealthState::Healthy);
        assert!(report.ollama_available);
        assert_eq!(report.available_models.len(), 2);
        assert_eq!(report.default_model, "phi3:mini");
        assert!(report.timestamp > 0);
    }

    #[tokio::test]
    async fn unreachable_backend_reports_degraded_without_listing() {
        let mut mock = MockEngine::new();
        mock.expect_is_available().returning(|| false);
        // list_models must not be called when the probe already failed
        mock.expect_list_models().times(0);
        mock.expect_default_model().return_const("phi3:mini");

        let report = HealthService::new(Arc::new(mock)).check().await;

        assert_eq!(report.status, HealthState::Degraded);
        assert!(!report.ollama_available);
        assert!(report.available_models.is_empty());
        assert!(report.timestamp > 0);
    }

    #[test]
    fn state_labels() {
        assert_eq!(HealthState::Healthy.as_str(), "healthy");
        assert_eq!(HealthState::Degraded.as_str(), "degraded");
    }

    #[test]
    fn state_serializes_snake_case() {
        let json = serde_json::to_string(&HealthState::Degraded).unwrap();
        assert_eq!(json, "\"degraded\"");
    }
}
