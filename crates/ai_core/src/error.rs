//! Inference errors

use thiserror::Error;

/// Errors that can occur while talking to the inference server
///
/// Timeouts, upstream failures, and everything else are kept distinct so
/// the handler boundary can translate each into its own HTTP status.
#[derive(Debug, Clone, Error)]
pub enum InferenceError {
    /// Backend did not respond within the per-call deadline
    #[error("Inference timeout after {0}ms")]
    Timeout(u64),

    /// Backend responded with a non-success status
    #[error("Inference server returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Any other transport or processing failure, including malformed
    /// backend responses
    #[error("Inference service error: {0}")]
    Service(String),
}

impl InferenceError {
    /// Classify a reqwest failure against the deadline that applied to it
    pub fn from_transport(err: &reqwest::Error, deadline_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(deadline_ms)
        } else {
            Self::Service(err.to_string())
        }
    }

    /// True for deadline expiries
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}
