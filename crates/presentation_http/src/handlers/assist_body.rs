//! Shared request body for the assistance endpoints

use domain::AssistRequest;
use serde::Deserialize;
use validator::Validate;

fn default_task_type() -> String {
    "general".to_string()
}

/// Request body accepted by chat and task endpoints
///
/// Mirrors [`AssistRequest`] with validation bounds applied at the edge.
#[derive(Debug, Deserialize, Validate)]
pub struct AssistBody {
    /// Student message or question
    #[validate(length(min = 1, message = "must not be empty"))]
    pub message: String,

    /// Supplementary material (book excerpt, notes)
    #[serde(default)]
    pub context: String,

    /// Cap on generated tokens
    #[validate(range(min = 1, max = 8192, message = "must be between 1 and 8192"))]
    pub max_tokens: Option<u32>,

    /// Sampling temperature override
    #[validate(range(min = 0.0, max = 2.0, message = "must be between 0 and 2"))]
    pub temperature: Option<f32>,

    /// Free-form task label, classified server-side
    #[serde(default = "default_task_type")]
    pub task_type: String,

    /// Book identifier the question relates to
    pub book_id: Option<String>,

    /// Client-side timestamp, echoed for the caller's bookkeeping
    pub timestamp: Option<i64>,
}

impl From<AssistBody> for AssistRequest {
    fn from(body: AssistBody) -> Self {
        Self {
            message: body.message,
            context: body.context,
            max_tokens: body.max_tokens,
            temperature: body.temperature,
            task_type: body.task_type,
            book_id: body.book_id,
            timestamp: body.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_body_deserializes_with_defaults() {
        let body: AssistBody = serde_json::from_str(r#"{"message": "Hello"}"#).unwrap();
        assert_eq!(body.message, "Hello");
        assert_eq!(body.context, "");
        assert_eq!(body.task_type, "general");
        assert!(body.temperature.is_none());
        assert!(body.book_id.is_none());
    }

    #[test]
    fn full_body_deserializes() {
        let json = r#"{
            "message": "Explain recursion",
            "context": "CS textbook chapter 4",
            "max_tokens": 500,
            "temperature": 0.3,
            "task_type": "code",
            "book_id": "cs-101",
            "timestamp": 1735000000
        }"#;
        let body: AssistBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.task_type, "code");
        assert_eq!(body.max_tokens, Some(500));
        assert_eq!(body.book_id.as_deref(), Some("cs-101"));
    }

    #[test]
    fn validation_rejects_empty_message() {
        let body: AssistBody = serde_json::from_str(r#"{"message": ""}"#).unwrap();
        assert!(body.validate().is_err());
    }

    #[test]
    fn validation_rejects_hot_temperature() {
        let body: AssistBody =
            serde_json::from_str(r#"{"message": "hi", "temperature": 2.5}"#).unwrap();
        assert!(body.validate().is_err());
    }

    #[test]
    fn validation_rejects_zero_max_tokens() {
        let body: AssistBody =
            serde_json::from_str(r#"{"message": "hi", "max_tokens": 0}"#).unwrap();
        assert!(body.validate().is_err());
    }

    #[test]
    fn validation_accepts_boundary_temperature() {
        let body: AssistBody =
            serde_json::from_str(r#"{"message": "hi", "temperature": 2.0}"#).unwrap();
        assert!(body.validate().is_ok());
    }

    #[test]
    fn conversion_preserves_all_fields() {
        let body: AssistBody = serde_json::from_str(
            r#"{"message": "q", "context": "c", "task_type": "homework", "book_id": "b1"}"#,
        )
        .unwrap();
        let request: AssistRequest = body.into();
        assert_eq!(request.message, "q");
        assert_eq!(request.context, "c");
        assert_eq!(request.task_type, "homework");
        assert_eq!(request.book_id.as_deref(), Some("b1"));
    }
}
