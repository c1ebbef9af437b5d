//! Configuration for the inference client

use serde::{Deserialize, Serialize};

/// Configuration for the inference client
///
/// Per-call deadlines differ deliberately: the version probe and model
/// listing are quick status calls, generation on local hardware can take
/// minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the inference server (Ollama-compatible)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Default conversational model
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Code-specialized model
    #[serde(default = "default_code_model")]
    pub code_model: String,

    /// Generation request deadline in milliseconds
    #[serde(default = "default_generate_timeout_ms")]
    pub generate_timeout_ms: u64,

    /// Version probe deadline in milliseconds
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,

    /// Model listing deadline in milliseconds
    #[serde(default = "default_list_timeout_ms")]
    pub list_timeout_ms: u64,

    /// Default maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Default sampling temperature (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Top-p (nucleus) sampling, fixed for every request
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Top-k sampling, fixed for every request
    #[serde(default = "default_top_k")]
    pub top_k: u32,
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "phi3:mini".to_string()
}

fn default_code_model() -> String {
    "codellama:7b".to_string()
}

const fn default_generate_timeout_ms() -> u64 {
    600_000 // local generation can take minutes
}

const fn default_probe_timeout_ms() -> u64 {
    5000
}

const fn default_list_timeout_ms() -> u64 {
    10_000
}

const fn default_max_tokens() -> u32 {
    2000
}

const fn default_temperature() -> f32 {
    0.7
}

const fn default_top_p() -> f32 {
    0.9
}

const fn default_top_k() -> u32 {
    40
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_model: default_model(),
            code_model: default_code_model(),
            generate_timeout_ms: default_generate_timeout_ms(),
            probe_timeout_ms: default_probe_timeout_ms(),
            list_timeout_ms: default_list_timeout_ms(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            top_k: default_top_k(),
        }
    }
}
