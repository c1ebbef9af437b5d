//! StudyRelay HTTP presentation layer
//!
//! This crate provides the HTTP API for StudyRelay.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod validation;

pub use config::AppConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
pub use validation::{ValidatedJson, ValidationError};
