//! Application-level errors

use ai_core::InferenceError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Inference failures are carried through intact so the handler boundary
/// can distinguish a backend timeout from other failures.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Inference backend failure
    #[error(transparent)]
    Inference(#[from] InferenceError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// True when the underlying cause is a backend deadline expiry
    #[must_use]
    pub fn is_backend_timeout(&self) -> bool {
        matches!(self, Self::Inference(e) if e.is_timeout())
    }
}
