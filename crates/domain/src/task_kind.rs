//! Task type classification
//!
//! Task-type labels arrive as free-form strings from the caller. They are
//! grouped into three kinds that decide which backing model serves the
//! request. Classification is total: unrecognized labels fall back to
//! `General`, never an error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of assistance task, derived from the request's task-type label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Programming questions, served by the code-specialized model
    Code,
    /// Homework guidance and concept explanation
    Homework,
    /// Everything else, including unrecognized labels
    #[default]
    General,
}

impl TaskKind {
    /// Classify a raw task-type label
    ///
    /// The label sets are disjoint; anything outside them is `General`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "code" | "programming" | "coding" => Self::Code,
            "homework" | "homework_help" | "explanation" => Self::Homework,
            _ => Self::General,
        }
    }

    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Homework => "homework",
            Self::General => "general",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_labels_classify_as_code() {
        for label in ["code", "programming", "coding"] {
            assert_eq!(TaskKind::from_label(label), TaskKind::Code);
        }
    }

    #[test]
    fn homework_labels_classify_as_homework() {
        for label in ["homework", "homework_help", "explanation"] {
            assert_eq!(TaskKind::from_label(label), TaskKind::Homework);
        }
    }

    #[test]
    fn anything_else_classifies_as_general() {
        for label in ["general", "", "CODE", "essay", "0xdeadbeef", "  code "] {
            assert_eq!(TaskKind::from_label(label), TaskKind::General);
        }
    }

    #[test]
    fn default_is_general() {
        assert_eq!(TaskKind::default(), TaskKind::General);
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(format!("{}", TaskKind::Code), "code");
        assert_eq!(format!("{}", TaskKind::Homework), "homework");
        assert_eq!(format!("{}", TaskKind::General), "general");
    }

    #[test]
    fn serde_snake_case() {
        let json = serde_json::to_string(&TaskKind::Homework).unwrap();
        assert_eq!(json, "\"homework\"");
    }
}
