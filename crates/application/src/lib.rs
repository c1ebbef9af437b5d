//! Application layer - Use cases and orchestration
//!
//! Composes the model selector, prompt builder, and inference engine into
//! the assistance operations the HTTP layer exposes.

pub mod error;
pub mod services;

pub use error::ApplicationError;
pub use services::*;
