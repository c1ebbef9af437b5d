//! Ollama client implementation

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::config::InferenceConfig;
use crate::error::InferenceError;
use crate::ports::{GenerationRequest, InferenceEngine};

/// Returned in place of generated text when the backend answers with
/// success but the response field is missing.
pub const FALLBACK_RESPONSE: &str = "Sorry, I could not produce an answer.";

/// Inference engine backed by an Ollama-compatible HTTP server
#[derive(Debug)]
pub struct OllamaInferenceEngine {
    client: Client,
    config: InferenceConfig,
}

impl OllamaInferenceEngine {
    /// Create a new Ollama inference engine
    ///
    /// Deadlines are applied per call, not on the client: the version probe
    /// and tags listing use short ones, generation a long one.
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .build()
            .map_err(|e| InferenceError::Service(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/api/{}",
            self.config.base_url,
            endpoint.trim_start_matches('/')
        )
    }
}

/// Ollama-format generate request
#[derive(Debug, Serialize)]
struct OllamaGenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f32,
    num_predict: u32,
    top_p: f32,
    top_k: u32,
}

/// Ollama-format generate response; the text field may be absent
#[derive(Debug, Deserialize)]
struct OllamaGenerateResponse {
    #[serde(default)]
    response: Option<String>,
}

/// Ollama models list response
#[derive(Debug, Deserialize)]
struct OllamaTagsResponse {
    #[serde(default)]
    models: Vec<OllamaModel>,
}

#[derive(Debug, Deserialize)]
struct OllamaModel {
    name: String,
}

#[async_trait]
impl InferenceEngine for OllamaInferenceEngine {
    #[instrument(skip(self, request), fields(model = %request.model, prompt_len = request.prompt.len()))]
    async fn generate(&self, request: GenerationRequest) -> Result<String, InferenceError> {
        let deadline_ms = self.config.generate_timeout_ms;

        let ollama_request = OllamaGenerateRequest {
            model: request.model,
            prompt: request.prompt,
            stream: false,
            options: OllamaOptions {
                temperature: request.temperature,
                num_predict: request.max_tokens,
                top_p: self.config.top_p,
                top_k: self.config.top_k,
            },
        };

        debug!("Sending generate request to ollama");

        let response = self
            .client
            .post(self.api_url("generate"))
            .timeout(Duration::from_millis(deadline_ms))
            .json(&ollama_request)
            .send()
            .await
            .map_err(|e| InferenceError::from_transport(&e, deadline_ms))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Generate request failed");
            return Err(InferenceError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let generate_response: OllamaGenerateResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::Service(e.to_string()))?;

        debug!(
            got_text = generate_response.response.is_some(),
            "Generate request completed"
        );

        Ok(generate_response
            .response
            .unwrap_or_else(|| FALLBACK_RESPONSE.to_string()))
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        let response = self
            .client
            .get(self.api_url("version"))
            .timeout(Duration::from_millis(self.config.probe_timeout_ms))
            .send()
            .await;

        match response {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                debug!(error = %e, "Version probe failed");
                false
            },
        }
    }

    #[instrument(skip(self))]
    async fn list_models(&self) -> Vec<String> {
        let response = self
            .client
            .get(self.api_url("tags"))
            .timeout(Duration::from_millis(self.config.list_timeout_ms))
            .send()
            .await;

        let response = match response {
            Ok(resp) if resp.status().is_success() => resp,
            Ok(resp) => {
                warn!(status = %resp.status(), "Model listing returned non-success");
                return Vec::new();
            },
            Err(e) => {
                warn!(error = %e, "Model listing failed");
                return Vec::new();
            },
        };

        match response.json::<OllamaTagsResponse>().await {
            Ok(tags) => tags.models.into_iter().map(|m| m.name).collect(),
            Err(e) => {
                warn!(error = %e, "Model listing body was malformed");
                Vec::new()
            },
        }
    }

    /// Transport failures here are always `Service`, never `Timeout`:
    /// the timeout classification is reserved for generation calls.
    #[instrument(skip(self))]
    async fn models_payload(&self) -> Result<serde_json::Value, InferenceError> {
        let response = self
            .client
            .get(self.api_url("tags"))
            .timeout(Duration::from_millis(self.config.list_timeout_ms))
            .send()
            .await
            .map_err(|e| InferenceError::Service(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| InferenceError::Service(e.to_string()))
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }
}
