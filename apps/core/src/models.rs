use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::assist::DEFAULT_MAX_SENTENCES;
use crate::error::AppError;

/// The text operation to run on a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistTask {
    /// Extractive summary
    Summarize,
    /// Action item checklist
    Actions,
    /// Clarity rewrite
    Clarify,
    /// Bullet point list
    Bullets,
}

impl AssistTask {
    /// Returns the short name used on the command line and in logs
    pub fn label(&self) -> &'static str {
        match self {
            AssistTask::Summarize => "summarize",
            AssistTask::Actions => "actions",
            AssistTask::Clarify => "clarify",
            AssistTask::Bullets => "bullets",
        }
    }
}

impl fmt::Display for AssistTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AssistTask {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "summarize" | "summary" => Ok(AssistTask::Summarize),
            "actions" | "action-items" => Ok(AssistTask::Actions),
            "clarify" | "clarity" => Ok(AssistTask::Clarify),
            "bullets" | "bullet-points" => Ok(AssistTask::Bullets),
            other => Err(AppError::Validation(format!("Unknown task: {}", other))),
        }
    }
}

/// A single request against the text-assist engine.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct AssistRequest {
    /// The raw input text. May be empty; the engine answers with a fallback message.
    pub text: String,
    /// Which operation to run.
    pub task: AssistTask,
    /// Upper bound on summary sentences. Only used by `Summarize`.
    #[validate(range(min = 1))]
    pub max_sentences: usize,
}

impl AssistRequest {
    /// Create a request with the default summary length
    pub fn new(text: impl Into<String>, task: AssistTask) -> Self {
        Self {
            text: text.into(),
            task,
            max_sentences: DEFAULT_MAX_SENTENCES,
        }
    }

    pub fn with_max_sentences(mut self, max_sentences: usize) -> Self {
        self.max_sentences = max_sentences;
        self
    }
}
