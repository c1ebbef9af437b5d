//! Application configuration
//!
//! Layered sources: built-in defaults, then an optional `config` file, then
//! `STUDYRELAY__*` environment variables (double underscore between
//! sections, e.g. `STUDYRELAY__INFERENCE__BASE_URL`).

use ai_core::InferenceConfig;
use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins (empty = allow all)
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Inference configuration
    #[serde(default)]
    pub inference: InferenceConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or a value fails to parse.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("inference.base_url", "http://localhost:11434")?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables. The section separator is
            // a double underscore so snake_case keys stay addressable,
            // e.g. STUDYRELAY__SERVER__PORT, STUDYRELAY__INFERENCE__BASE_URL.
            .add_source(
                config::Environment::with_prefix("STUDYRELAY")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert!(config.allowed_origins.is_empty());
    }

    #[test]
    fn default_app_config_carries_inference_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.inference.default_model, "phi3:mini");
        assert_eq!(config.inference.code_model, "codellama:7b");
    }

    #[test]
    fn deserializes_partial_toml() {
        let toml = r#"
            [server]
            port = 9001

            [inference]
            default_model = "llama3:8b"
        "#;
        let config: AppConfig = toml_from_str(toml);
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.inference.default_model, "llama3:8b");
        assert_eq!(config.inference.code_model, "codellama:7b");
    }

    fn toml_from_str(input: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(input, config::FileFormat::Toml))
            .build()
            .and_then(config::Config::try_deserialize)
            .unwrap()
    }

    #[test]
    fn env_overrides_reach_snake_case_keys() {
        // Injected source instead of the process environment, so the test
        // cannot race with other tests mutating env vars
        let vars = std::collections::HashMap::from([
            (
                "STUDYRELAY__INFERENCE__BASE_URL".to_string(),
                "http://elsewhere:9999".to_string(),
            ),
            (
                "STUDYRELAY__INFERENCE__MAX_TOKENS".to_string(),
                "512".to_string(),
            ),
            ("STUDYRELAY__SERVER__PORT".to_string(), "9100".to_string()),
        ]);

        let config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("STUDYRELAY")
                    .separator("__")
                    .source(Some(vars))
                    .try_parsing(true),
            )
            .build()
            .and_then(config::Config::try_deserialize)
            .unwrap();

        assert_eq!(config.inference.base_url, "http://elsewhere:9999");
        assert_eq!(config.inference.max_tokens, 512);
        assert_eq!(config.server.port, 9100);
        // Untouched keys keep their defaults
        assert_eq!(config.inference.default_model, "phi3:mini");
    }
}
