//! Assist Report - Output structure for a full analysis run.
//!
//! Holds the result of every text operation for one input, plus a few counts
//! that are handy when the report is consumed as JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::summarizer::ScoredSentence;

/// Complete report from running every assist operation on one text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistReport {
    /// Unique identifier of this run
    pub id: Uuid,

    /// Extractive summary
    pub summary: String,

    /// Action item checklist (or the fallback message)
    pub action_items: String,

    /// Clarity-rewritten text
    pub clarified: String,

    /// Bullet point rendering
    pub bullet_points: String,

    /// Every sentence with its frequency score, in document order
    pub sentence_scores: Vec<ScoredSentence>,

    /// Number of sentences found in the input
    pub sentence_count: usize,

    /// Number of unique action items found
    pub action_item_count: usize,

    /// Summary length limit that was applied
    pub max_sentences: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Timestamp of analysis
    pub timestamp: DateTime<Utc>,
}

impl AssistReport {
    /// Create an empty report stamped with a fresh id and the current time
    pub fn new(max_sentences: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            summary: String::new(),
            action_items: String::new(),
            clarified: String::new(),
            bullet_points: String::new(),
            sentence_scores: vec![],
            sentence_count: 0,
            action_item_count: 0,
            max_sentences,
            processing_time_ms: 0,
            timestamp: Utc::now(),
        }
    }

    /// Serialize the report as indented JSON
    pub fn to_json_pretty(&self) -> Result<String, crate::error::AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_is_empty() {
        let report = AssistReport::new(3);
        assert!(report.summary.is_empty());
        assert!(report.sentence_scores.is_empty());
        assert_eq!(report.max_sentences, 3);
        assert_eq!(report.action_item_count, 0);
    }

    #[test]
    fn test_report_json_fields() {
        let report = AssistReport::new(2);
        let json = report.to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["max_sentences"], 2);
        assert!(value["id"].is_string());
        assert!(value["timestamp"].is_string());
    }
}
