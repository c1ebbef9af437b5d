//! Assistance request value object

use serde::{Deserialize, Serialize};

/// A single student-facing assistance request
///
/// Constructed once per incoming call and never mutated afterwards. Sampling
/// overrides are optional; the service layer substitutes configured defaults
/// when they are absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistRequest {
    /// The student's question, assignment text, or focus question
    pub message: String,
    /// Supplementary material (source text, notes); empty when not supplied
    #[serde(default)]
    pub context: String,
    /// Maximum tokens to generate; service default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Sampling temperature in [0.0, 2.0]; service default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Raw task-type label; classified by `TaskKind::from_label`
    #[serde(default = "default_task_type")]
    pub task_type: String,
    /// Opaque identifier of the book the question relates to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<String>,
    /// Caller-supplied unix timestamp; carried through, never interpreted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

fn default_task_type() -> String {
    "general".to_string()
}

impl AssistRequest {
    /// Create a request with only a message, everything else defaulted
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: String::new(),
            max_tokens: None,
            temperature: None,
            task_type: default_task_type(),
            book_id: None,
            timestamp: None,
        }
    }

    /// Set the supplementary context
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Set the task-type label
    #[must_use]
    pub fn with_task_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = task_type.into();
        self
    }

    /// Set the related book identifier
    #[must_use]
    pub fn with_book_id(mut self, book_id: impl Into<String>) -> Self {
        self.book_id = Some(book_id.into());
        self
    }

    /// Set the sampling temperature override
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the max-tokens override
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}
