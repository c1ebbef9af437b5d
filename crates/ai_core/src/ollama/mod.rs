//! Ollama-compatible inference adapter
//!
//! Talks to any server exposing Ollama's `/api/version`, `/api/tags`, and
//! `/api/generate` endpoints.

mod client;

pub use client::{FALLBACK_RESPONSE, OllamaInferenceEngine};
