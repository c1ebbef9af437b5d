//! Port definition for the inference engine
//!
//! The application layer talks to the backing server through this trait;
//! adapters (currently only the Ollama client) implement it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// A single non-streaming generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Model identifier, passed through unvalidated
    pub model: String,
    /// Fully rendered prompt text
    pub prompt: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

impl GenerationRequest {
    /// Create a generation request
    pub fn new(
        model: impl Into<String>,
        prompt: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            temperature,
            max_tokens,
        }
    }
}

/// Port for inference engine implementations
#[async_trait]
pub trait InferenceEngine: Send + Sync {
    /// Generate a complete response for the prompt
    ///
    /// Never fails on a response body that merely lacks generated text;
    /// adapters substitute a fixed fallback message instead.
    async fn generate(&self, request: GenerationRequest) -> Result<String, InferenceError>;

    /// Probe the backend's version endpoint
    ///
    /// True iff the backend answered with success within the probe
    /// deadline. Every failure mode maps to false, never an error.
    async fn is_available(&self) -> bool;

    /// List the model names known to the backend
    ///
    /// Empty when the backend call fails or returns non-success.
    async fn list_models(&self) -> Vec<String>;

    /// Raw model-listing payload, exactly as the backend returned it
    async fn models_payload(&self) -> Result<serde_json::Value, InferenceError>;

    /// The default conversational model
    fn default_model(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_request_fields() {
        let req = GenerationRequest::new("phi3:mini", "Answer:", 0.7, 2000);
        assert_eq!(req.model, "phi3:mini");
        assert_eq!(req.prompt, "Answer:");
        assert!((req.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(req.max_tokens, 2000);
    }

    #[test]
    fn generation_request_serialization() {
        let req = GenerationRequest::new("codellama:7b", "fn main() {", 0.2, 128);
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("codellama:7b"));
        assert!(json.contains("fn main()"));
        let parsed: GenerationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.max_tokens, 128);
    }
}
