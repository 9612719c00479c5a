//! # Assist Module
//!
//! Deterministic, offline text assistance. Everything here is rule-based:
//! sentence splitting, word frequency scoring and regex substitution.
//!
//! ## Components
//! - `sentences`: Sentence splitting on terminal punctuation
//! - `frequency`: Word tokenization and frequency counting
//! - `summarizer`: Extractive summaries
//! - `action_items`: TODO / imperative checklist extraction
//! - `clarity`: Wordy phrase rewriting
//! - `bullets`: Bullet point conversion
//! - `report`: Output data structure
//! - `analyzer`: Main orchestrator

pub mod action_items;
pub mod analyzer;
pub mod bullets;
pub mod clarity;
pub mod frequency;
pub mod report;
pub mod sentences;
pub mod summarizer;

pub use action_items::{collect_action_items, extract_action_items, NO_ACTION_ITEMS};
pub use analyzer::AssistAnalyzer;
pub use bullets::{to_bullet_points, EMPTY_BULLETS};
pub use clarity::improve_clarity;
pub use frequency::{is_stop_word, tokenize_words, word_frequencies};
pub use report::AssistReport;
pub use sentences::split_sentences;
pub use summarizer::{
    rank_sentences, summarize_text, ScoredSentence, DEFAULT_MAX_SENTENCES, EMPTY_SUMMARY,
};
