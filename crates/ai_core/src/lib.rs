//! Inference client layer for StudyRelay
//!
//! Defines the port to the backing inference server, the Ollama-compatible
//! HTTP adapter, and the task-to-model selection policy.

pub mod config;
pub mod error;
pub mod ollama;
pub mod ports;
pub mod selector;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use ollama::{FALLBACK_RESPONSE, OllamaInferenceEngine};
pub use ports::{GenerationRequest, InferenceEngine};
pub use selector::ModelSelector;
