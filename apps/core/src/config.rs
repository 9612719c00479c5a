//! Runtime configuration.
//!
//! Values come from the process environment (optionally seeded from a `.env`
//! file by the binary). Command-line flags override them.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::assist::DEFAULT_MAX_SENTENCES;
use crate::error::AppError;

pub const ENV_MAX_SENTENCES: &str = "ASSIST_MAX_SENTENCES";
pub const ENV_LOG_FORMAT: &str = "ASSIST_LOG_FORMAT";
pub const ENV_LOG_LEVEL: &str = "ASSIST_LOG_LEVEL";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
    /// Bunyan-compatible JSON
    Bunyan,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
            LogFormat::Bunyan => "bunyan",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "bunyan" => Ok(LogFormat::Bunyan),
            other => Err(AppError::Config(format!("Unknown log format: {}", other))),
        }
    }
}

/// Configuration for the assist binary and analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AssistConfig {
    /// Default upper bound on summary sentences
    #[validate(range(min = 1))]
    pub max_sentences: usize,
    pub log_format: LogFormat,
    /// Fallback filter directive when `RUST_LOG` is not set
    #[validate(length(min = 1))]
    pub log_level: String,
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            max_sentences: DEFAULT_MAX_SENTENCES,
            log_format: LogFormat::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AssistConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Ok(raw) = env::var(ENV_MAX_SENTENCES) {
            config.max_sentences = raw.trim().parse::<usize>()?;
        }

        if let Ok(raw) = env::var(ENV_LOG_FORMAT) {
            config.log_format = raw.parse()?;
        }

        if let Ok(raw) = env::var(ENV_LOG_LEVEL) {
            config.log_level = raw.trim().to_string();
        }

        config
            .validate()
            .map_err(|e| AppError::Config(format!("Invalid configuration: {}", e)))?;

        Ok(config)
    }
}
