//! Assist Analyzer - Main orchestrator for the assist module.
//!
//! Validates requests, dispatches them to the matching text operation and
//! assembles full reports. Every operation underneath is a pure function, so the
//! analyzer only carries configuration.

use std::time::Instant;
use tracing::{debug, info};
use validator::Validate;

use super::action_items::{collect_action_items, extract_action_items};
use super::bullets::to_bullet_points;
use super::clarity::improve_clarity;
use super::report::AssistReport;
use super::summarizer::{rank_sentences, summarize_text, DEFAULT_MAX_SENTENCES};
use crate::config::AssistConfig;
use crate::error::AppError;
use crate::models::{AssistRequest, AssistTask};

/// Main analyzer that routes text to the assist operations
#[derive(Debug, Clone, Validate)]
pub struct AssistAnalyzer {
    #[validate(range(min = 1))]
    max_sentences: usize,
}

impl Default for AssistAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SENTENCES)
    }
}

impl AssistAnalyzer {
    /// Create an analyzer with the given summary length
    pub fn new(max_sentences: usize) -> Self {
        Self { max_sentences }
    }

    /// Create an analyzer from loaded configuration
    pub fn from_config(config: &AssistConfig) -> Self {
        Self::new(config.max_sentences)
    }

    pub fn max_sentences(&self) -> usize {
        self.max_sentences
    }

    /// Build a request for `task` using this analyzer's summary length
    pub fn request(&self, text: impl Into<String>, task: AssistTask) -> AssistRequest {
        AssistRequest::new(text, task).with_max_sentences(self.max_sentences)
    }

    /// Validate a request and run its task
    pub fn run(&self, request: &AssistRequest) -> Result<String, AppError> {
        request.validate()?;

        let start = Instant::now();
        let output = match request.task {
            AssistTask::Summarize => summarize_text(&request.text, request.max_sentences),
            AssistTask::Actions => extract_action_items(&request.text),
            AssistTask::Clarify => improve_clarity(&request.text),
            AssistTask::Bullets => to_bullet_points(&request.text),
        };

        info!(
            task = %request.task,
            input_chars = request.text.chars().count(),
            output_chars = output.chars().count(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Assist task completed"
        );

        Ok(output)
    }

    /// Run every operation on the text and collect the results
    pub fn analyze(&self, text: &str) -> Result<AssistReport, AppError> {
        self.validate()?;

        let start = Instant::now();
        let mut report = AssistReport::new(self.max_sentences);

        report.sentence_scores = rank_sentences(text);
        report.sentence_count = report.sentence_scores.len();
        debug!(sentences = report.sentence_count, "Sentences scored");

        report.summary = summarize_text(text, self.max_sentences);
        report.action_item_count = collect_action_items(text).len();
        report.action_items = extract_action_items(text);
        report.clarified = improve_clarity(text);
        report.bullet_points = to_bullet_points(text);

        report.processing_time_ms = start.elapsed().as_millis() as u64;

        info!(
            id = %report.id,
            sentences = report.sentence_count,
            action_items = report.action_item_count,
            time_ms = report.processing_time_ms,
            "Assist report built"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assist::{EMPTY_BULLETS, EMPTY_SUMMARY, NO_ACTION_ITEMS};

    #[test]
    fn test_run_dispatches_tasks() {
        let analyzer = AssistAnalyzer::default();
        let text = "First sentence. Second sentence!";

        let bullets = analyzer.run(&analyzer.request(text, AssistTask::Bullets)).unwrap();
        assert_eq!(bullets, "• First sentence\n• Second sentence!");

        let clarified = analyzer
            .run(&analyzer.request("We utilize   tools.", AssistTask::Clarify))
            .unwrap();
        assert_eq!(clarified, "We use tools.");
    }

    #[test]
    fn test_run_rejects_invalid_request() {
        let analyzer = AssistAnalyzer::new(0);
        let request = analyzer.request("Some text.", AssistTask::Summarize);
        let result = analyzer.run(&request);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_analyze_empty_text() {
        let report = AssistAnalyzer::default().analyze("   ").unwrap();
        assert_eq!(report.summary, EMPTY_SUMMARY);
        assert_eq!(report.action_items, NO_ACTION_ITEMS);
        assert_eq!(report.bullet_points, EMPTY_BULLETS);
        assert_eq!(report.clarified, "   ");
        assert_eq!(report.sentence_count, 0);
        assert_eq!(report.action_item_count, 0);
    }

    #[test]
    fn test_analyze_counts() {
        let text = "We need to ship this release. TODO: add tests. Also update docs.";
        let report = AssistAnalyzer::new(2).analyze(text).unwrap();
        assert_eq!(report.sentence_count, 3);
        assert_eq!(report.action_item_count, 2);
        assert_eq!(report.max_sentences, 2);
        assert_eq!(report.sentence_scores[2].index, 2);
    }

    #[test]
    fn test_analyze_rejects_zero_sentences() {
        let result = AssistAnalyzer::new(0).analyze("Some text.");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
