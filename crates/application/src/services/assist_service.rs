//! Assistance service - one-shot request/response transforms

use std::{fmt, sync::Arc, time::Instant};

use ai_core::{GenerationRequest, InferenceConfig, InferenceEngine, ModelSelector};
use chrono::Utc;
use domain::AssistRequest;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    services::prompt_builder::{
        EXPLAIN_TEMPERATURE, HOMEWORK_TEMPERATURE, SUMMARIZE_TEMPERATURE, build_explain_prompt,
        build_general_prompt, build_homework_prompt, build_summarize_prompt,
    },
};

/// Outcome of a general chat request, including timing metadata
#[derive(Debug, Clone, Serialize)]
pub struct ChatOutcome {
    /// Generated text
    pub response: String,
    /// Model that served the request
    pub model_used: String,
    /// Wall-clock time of the inference call only, in milliseconds
    pub processing_time_ms: u64,
    /// Unix seconds at completion
    pub timestamp: i64,
}

/// Outcome of a specialized task (summarize / explain / homework help)
#[derive(Debug, Clone, Serialize)]
pub struct TaskOutcome {
    /// Generated text
    pub response: String,
    /// Model that served the request
    pub model_used: String,
    /// Task tag for the caller
    pub task_type: &'static str,
}

/// Service composing selector, prompt builder, and inference engine
///
/// Stateless: every call is an independent transform, nothing is retained
/// between requests.
pub struct AssistService {
    engine: Arc<dyn InferenceEngine>,
    selector: ModelSelector,
    default_temperature: f32,
    default_max_tokens: u32,
}

impl fmt::Debug for AssistService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistService")
            .field("selector", &self.selector)
            .field("default_temperature", &self.default_temperature)
            .field("default_max_tokens", &self.default_max_tokens)
            .finish_non_exhaustive()
    }
}

impl AssistService {
    /// Create an assistance service
    pub fn new(engine: Arc<dyn InferenceEngine>, config: &InferenceConfig) -> Self {
        Self {
            engine,
            selector: ModelSelector::new(config),
            default_temperature: config.temperature,
            default_max_tokens: config.max_tokens,
        }
    }

    /// Handle a general chat request
    ///
    /// Elapsed time is measured around the inference call only, not the
    /// surrounding prompt construction.
    #[instrument(skip(self, request), fields(task_type = %request.task_type, message_len = request.message.len()))]
    pub async fn chat(&self, request: &AssistRequest) -> Result<ChatOutcome, ApplicationError> {
        let model = self.selector.select_for_label(&request.task_type).to_string();
        let prompt = build_general_prompt(request);
        let temperature = request.temperature.unwrap_or(self.default_temperature);
        let max_tokens = request.max_tokens.unwrap_or(self.default_max_tokens);

        let start = Instant::now();
        let response = self
            .engine
            .generate(GenerationRequest::new(
                model.clone(),
                prompt,
                temperature,
                max_tokens,
            ))
            .await?;
        let processing_time_ms = start.elapsed().as_millis() as u64;

        debug!(
            model = %model,
            processing_time_ms,
            "Chat response generated"
        );

        Ok(ChatOutcome {
            response,
            model_used: model,
            processing_time_ms,
            timestamp: Utc::now().timestamp(),
        })
    }

    /// Produce a structured summary; `context` is the source text
    #[instrument(skip(self, request), fields(context_len = request.context.len()))]
    pub async fn summarize(
        &self,
        request: &AssistRequest,
    ) -> Result<TaskOutcome, ApplicationError> {
        let prompt = build_summarize_prompt(&request.message, &request.context);
        self.run_task(prompt, SUMMARIZE_TEMPERATURE, request, "summarization")
            .await
    }

    /// Explain the concept named in `message`
    #[instrument(skip(self, request), fields(message_len = request.message.len()))]
    pub async fn explain(&self, request: &AssistRequest) -> Result<TaskOutcome, ApplicationError> {
        let prompt = build_explain_prompt(&request.message, &request.context);
        self.run_task(prompt, EXPLAIN_TEMPERATURE, request, "explanation")
            .await
    }

    /// Guide the student through the assignment without solving it
    #[instrument(skip(self, request), fields(message_len = request.message.len()))]
    pub async fn homework_help(
        &self,
        request: &AssistRequest,
    ) -> Result<TaskOutcome, ApplicationError> {
        let prompt = build_homework_prompt(&request.message, &request.context);
        self.run_task(prompt, HOMEWORK_TEMPERATURE, request, "homework_help")
            .await
    }

    /// Specialized tasks share the default conversational model and pin
    /// their temperature; only the caller's max-tokens override survives.
    async fn run_task(
        &self,
        prompt: String,
        temperature: f32,
        request: &AssistRequest,
        task_type: &'static str,
    ) -> Result<TaskOutcome, ApplicationError> {
        // Homework resolves through the selector with its fixed label; the
        // outcome is the default model either way.
        let model = if task_type == "homework_help" {
            self.selector.select_for_label("homework").to_string()
        } else {
            self.selector.default_model().to_string()
        };
        let max_tokens = request.max_tokens.unwrap_or(self.default_max_tokens);

        let response = self
            .engine
            .generate(GenerationRequest::new(
                model.clone(),
                prompt,
                temperature,
                max_tokens,
            ))
            .await?;

        debug!(model = %model, task_type, "Task response generated");

        Ok(TaskOutcome {
            response,
            model_used: model,
            task_type,
        })
    }

    /// Raw model-listing payload relayed from the backend
    pub async fn models_payload(&self) -> Result<serde_json::Value, ApplicationError> {
        Ok(self.engine.models_payload().await?)
    }
}
