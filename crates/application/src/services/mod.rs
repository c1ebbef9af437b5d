//! Application services

mod assist_service;
mod health_service;
pub mod prompt_builder;

pub use assist_service::{AssistService, ChatOutcome, TaskOutcome};
pub use health_service::{HealthReport, HealthService, HealthState};
