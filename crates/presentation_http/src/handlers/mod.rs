//! HTTP request handlers

pub mod chat;
pub mod health;
pub mod info;
pub mod models;
pub mod tasks;

mod assist_body;

pub use assist_body::AssistBody;
