//! Task-to-model selection policy
//!
//! Maps a task-type label to the model that serves it. The policy is total:
//! unknown labels resolve to the default conversational model, never an
//! error.

use domain::TaskKind;
use tracing::debug;

use crate::config::InferenceConfig;

/// Selects the backing model for a task type
#[derive(Debug, Clone)]
pub struct ModelSelector {
    default_model: String,
    code_model: String,
}

impl ModelSelector {
    /// Create a selector from the inference configuration
    pub fn new(config: &InferenceConfig) -> Self {
        Self {
            default_model: config.default_model.clone(),
            code_model: config.code_model.clone(),
        }
    }

    /// Select the model for a classified task kind
    #[must_use]
    pub fn select(&self, kind: TaskKind) -> &str {
        match kind {
            TaskKind::Code => &self.code_model,
            TaskKind::Homework | TaskKind::General => &self.default_model,
        }
    }

    /// Select the model for a raw task-type label
    #[must_use]
    pub fn select_for_label(&self, label: &str) -> &str {
        let kind = TaskKind::from_label(label);
        let model = self.select(kind);
        debug!(task_kind = %kind, model = %model, "Selected model for task");
        model
    }

    /// The default conversational model
    #[must_use]
    pub fn default_model(&self) -> &str {
        &self.default_model
    }
}
