//! # assist-core
//!
//! Deterministic, offline text assistance: extractive summaries, action item
//! checklists, clarity rewrites and bullet points. No models, no network.
//!
//! ```
//! use assist_core::{improve_clarity, to_bullet_points};
//!
//! assert_eq!(improve_clarity("We utilize   this."), "We use this.");
//! assert_eq!(to_bullet_points("One. Two!"), "• One\n• Two!");
//! ```

pub mod assist;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use assist::{
    extract_action_items, improve_clarity, summarize_text, to_bullet_points, AssistAnalyzer,
    AssistReport, DEFAULT_MAX_SENTENCES,
};
pub use config::AssistConfig;
pub use error::AppError;
pub use models::{AssistRequest, AssistTask};
