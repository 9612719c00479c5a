//! Sentence splitting.
//!
//! Splits raw text on terminal punctuation (`.`, `!`, `?`) followed by whitespace.
//! Abbreviations such as "e.g." are not special-cased: "e.g. this" yields two
//! sentences. Every other text transform in this module tree builds on this.

use regex::Regex;
use std::sync::LazyLock;

// NOTE: expect() is acceptable here, the pattern is a compile-time constant
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("Invalid regex: sentence boundary"));

/// Split text into trimmed, non-empty sentences in document order.
pub fn split_sentences(text: &str) -> Vec<String> {
    let cleaned = text.trim();
    if cleaned.is_empty() {
        return vec![];
    }

    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(cleaned) {
        // Punctuation is ASCII, so the sentence ends one byte into the match
        push_fragment(&mut sentences, &cleaned[start..boundary.start() + 1]);
        start = boundary.end();
    }
    push_fragment(&mut sentences, &cleaned[start..]);

    sentences
}

fn push_fragment(sentences: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        sentences.push(fragment.to_string());
    }
}
