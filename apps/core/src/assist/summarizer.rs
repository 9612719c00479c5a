//! Extractive summarization.
//!
//! Scores each sentence by the document-wide frequency of its words, keeps the
//! best ones and returns them in their original order. No paraphrasing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::frequency::{tokenize_words, word_frequencies};
use super::sentences::split_sentences;

/// Returned when the input holds no sentence at all
pub const EMPTY_SUMMARY: &str = "No content to summarize.";

/// Number of sentences kept when the caller does not choose
pub const DEFAULT_MAX_SENTENCES: usize = 3;

/// A sentence with its frequency score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredSentence {
    /// Sum of the frequencies of the sentence's words
    pub score: usize,
    /// Position in the original text
    pub index: usize,
    pub text: String,
}

/// Score every sentence of the text, in document order.
///
/// Returns an empty vector when the text has no sentences. All scores are zero
/// when the text has no scorable words.
pub fn rank_sentences(text: &str) -> Vec<ScoredSentence> {
    let frequencies = word_frequencies(text);

    split_sentences(text)
        .into_iter()
        .enumerate()
        .map(|(index, sentence)| {
            let score = tokenize_words(&sentence)
                .iter()
                .map(|word| frequencies.get(word).copied().unwrap_or(0))
                .sum();
            ScoredSentence {
                score,
                index,
                text: sentence,
            }
        })
        .collect()
}

/// Build a summary of at most `max_sentences` sentences.
pub fn summarize_text(text: &str, max_sentences: usize) -> String {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return EMPTY_SUMMARY.to_string();
    }

    if word_frequencies(text).is_empty() {
        debug!("No scorable words, keeping leading sentences");
        return sentences
            .into_iter()
            .take(max_sentences)
            .collect::<Vec<_>>()
            .join(" ");
    }

    let mut ranked = rank_sentences(text);

    // Stable sort: equal scores keep document order, so earlier sentences win ties
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(max_sentences);
    ranked.sort_by_key(|s| s.index);

    debug!(
        selected = ranked.len(),
        total = sentences.len(),
        "Summary sentences selected"
    );

    ranked
        .into_iter()
        .map(|s| s.text)
        .collect::<Vec<_>>()
        .join(" ")
}
