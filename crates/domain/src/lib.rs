//! Domain layer for StudyRelay
//!
//! Contains the value objects shared by all layers: the assistance request
//! and the task-type classification that drives model selection and prompt
//! templating. This layer has no knowledge of HTTP or the inference backend.

pub mod assist_request;
pub mod task_kind;

pub use assist_request::AssistRequest;
pub use task_kind::TaskKind;
