//! Word frequency scoring.
//!
//! Tokenizes text into lowercase words made of ASCII letters and apostrophes and
//! counts the ones that carry meaning: stopwords and tokens of two characters or
//! fewer are dropped.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Stopwords excluded from frequency scoring
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "if", "to", "of", "in", "on", "for", "with", "as", "at",
    "by", "is", "are", "was", "were", "be", "this", "that", "it", "from", "we", "you", "they", "i",
    "our", "your", "their", "will", "can", "should", "could",
];

/// Tokens must be strictly longer than this to be counted
const MIN_WORD_LENGTH: usize = 2;

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z']+").expect("Invalid regex: word pattern"));

/// Check if a lowercase word is a stopword
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Split text into lowercase words (letters and apostrophes only)
pub fn tokenize_words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Count every scorable word in the text
pub fn word_frequencies(text: &str) -> HashMap<String, usize> {
    let mut freq: HashMap<String, usize> = HashMap::new();
    for word in tokenize_words(text) {
        if word.len() > MIN_WORD_LENGTH && !is_stop_word(&word) {
            *freq.entry(word).or_insert(0) += 1;
        }
    }
    freq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_keeps_apostrophes() {
        let words = tokenize_words("Let's ship it, Bob's release v2!");
        assert_eq!(words, vec!["let's", "ship", "it", "bob's", "release", "v"]);
    }

    #[test]
    fn test_digits_split_words() {
        let words = tokenize_words("abc123def");
        assert_eq!(words, vec!["abc", "def"]);
    }

    #[test]
    fn test_frequencies_are_case_insensitive() {
        let freq = word_frequencies("Release notes. RELEASE day. release!");
        assert_eq!(freq.get("release"), Some(&3));
        assert_eq!(freq.get("notes"), Some(&1));
        assert_eq!(freq.get("day"), Some(&1));
    }

    #[test]
    fn test_stopword_filtering() {
        let freq = word_frequencies("the and should could their will");
        assert!(freq.is_empty());
    }

    #[test]
    fn test_short_words_filtered() {
        let freq = word_frequencies("go do me up ox");
        assert!(freq.is_empty());
    }

    #[test]
    fn test_empty_text() {
        assert!(word_frequencies("").is_empty());
        assert!(word_frequencies("  42 7 ... ").is_empty());
    }
}
