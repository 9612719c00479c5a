//! Action item extraction.
//!
//! Scans each line, then each sentence of that line, for imperative verbs,
//! TODO-style markers and obligation phrases. Matches are de-duplicated and
//! rendered as a markdown checklist.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

use super::sentences::split_sentences;

/// Returned when nothing in the text looks like a task
pub const NO_ACTION_ITEMS: &str = "No obvious action items found.";

/// Verbs that mark a sentence as a task when it starts with one
const CUE_VERBS: &[&str] = &[
    "todo",
    "fix",
    "add",
    "implement",
    "update",
    "refactor",
    "review",
    "ship",
    "test",
];

/// Markers that flag a task anywhere in the sentence
const TASK_MARKERS: &[&str] = &["todo:", "action:", "next:"];

/// Line characters that separate lines (universal newlines)
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*\d.)\s]+").expect("Invalid regex: list marker"));

static OBLIGATION_PHRASES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(need to|should|must|let's|please)\b").expect("Invalid regex: obligation phrases")
});

fn is_action_sentence(sentence: &str) -> bool {
    let low = sentence.to_lowercase();

    CUE_VERBS.iter().any(|verb| low.starts_with(verb))
        || TASK_MARKERS.iter().any(|marker| low.contains(marker))
        || OBLIGATION_PHRASES.is_match(&low)
}

/// Collect task-like sentences in encounter order, duplicates included
fn candidate_items(text: &str) -> Vec<String> {
    let mut candidates = Vec::new();

    for line in text.split(LINE_BREAKS).map(str::trim).filter(|l| !l.is_empty()) {
        let plain = LIST_MARKER.replace(line, "");
        let plain = plain.trim();
        if plain.is_empty() {
            continue;
        }

        let mut line_sentences = split_sentences(plain);
        if line_sentences.is_empty() {
            line_sentences.push(plain.to_string());
        }

        candidates.extend(
            line_sentences
                .into_iter()
                .filter(|sentence| is_action_sentence(sentence)),
        );
    }

    candidates
}

/// De-duplication key: lowercase with trailing `.` and `!` removed
fn normalized_key(item: &str) -> String {
    item.to_lowercase().trim_end_matches(['.', '!']).to_string()
}

/// Unique action items in first-seen order
pub fn collect_action_items(text: &str) -> Vec<String> {
    let candidates = candidate_items(text);
    let total = candidates.len();

    let mut seen = HashSet::new();
    let unique: Vec<String> = candidates
        .into_iter()
        .filter(|item| seen.insert(normalized_key(item)))
        .map(|item| item.trim_end().to_string())
        .collect();

    debug!(candidates = total, unique = unique.len(), "Action items collected");
    unique
}

/// Extract action items and format them as a checklist
pub fn extract_action_items(text: &str) -> String {
    let items = collect_action_items(text);
    if items.is_empty() {
        return NO_ACTION_ITEMS.to_string();
    }

    items
        .iter()
        .map(|item| format!("- [ ] {}", item.trim_end_matches(['.', '!'])))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_action_items_splits_sentences() {
        let text = "We need to ship this release. TODO: add tests. Also update docs.";
        let items = extract_action_items(text);
        assert!(items.contains("- [ ] We need to ship this release"));
        assert!(items.contains("- [ ] TODO: add tests"));
    }

    #[test]
    fn test_no_action_items() {
        assert_eq!(extract_action_items(""), NO_ACTION_ITEMS);
        assert_eq!(
            extract_action_items("The weather was nice. Everyone enjoyed lunch."),
            NO_ACTION_ITEMS
        );
    }

    #[test]
    fn test_list_markers_are_stripped() {
        let text = "- fix the login bug\n* review PR 42\n3) update changelog\n1. ship it";
        let items = extract_action_items(text);
        assert_eq!(
            items,
            "- [ ] fix the login bug\n- [ ] review PR 42\n- [ ] update changelog\n- [ ] ship it"
        );
    }

    #[test]
    fn test_duplicates_removed_first_wins() {
        let text = "Fix the build!\nfix the build.\nFIX THE BUILD";
        assert_eq!(extract_action_items(text), "- [ ] Fix the build");
    }

    #[test]
    fn test_question_mark_not_normalized() {
        let items = collect_action_items("Should we test it?\nShould we test it.");
        assert_eq!(items, vec!["Should we test it?", "Should we test it."]);
    }

    #[test]
    fn test_markers_anywhere() {
        let text = "Meeting recap, action: send notes. Next: book room";
        let items = collect_action_items(text);
        assert_eq!(items, vec!["Meeting recap, action: send notes.", "Next: book room"]);
    }

    #[test]
    fn test_obligation_phrases_require_whole_words() {
        assert_eq!(extract_action_items("The mustard was great."), NO_ACTION_ITEMS);
        assert_eq!(
            extract_action_items("Let's regroup tomorrow."),
            "- [ ] Let's regroup tomorrow"
        );
    }

    #[test]
    fn test_cue_verbs_are_prefix_matches() {
        // "address" starts with "add"
        let items = collect_action_items("Address the feedback.");
        assert_eq!(items, vec!["Address the feedback."]);
    }

    #[test]
    fn test_windows_line_endings() {
        let text = "Implement caching\r\nPlease review\r\n";
        assert_eq!(
            extract_action_items(text),
            "- [ ] Implement caching\n- [ ] Please review"
        );
    }

    #[test]
    fn test_universal_line_breaks() {
        let items = collect_action_items("Fix a\u{2028}Please b\u{85}Review c\u{0c}ship d");
        assert_eq!(items, vec!["Fix a", "Please b", "Review c", "ship d"]);

        let items = collect_action_items(
            "Add x\u{0b}Test y\u{1c}Fix z\u{1d}Ship w\u{1e}Update v\u{2029}Review u\rTodo t",
        );
        assert_eq!(
            items,
            vec!["Add x", "Test y", "Fix z", "Ship w", "Update v", "Review u", "Todo t"]
        );
    }

    #[test]
    fn test_unit_separator_is_not_a_line_break() {
        let items = collect_action_items("Fix a\u{1f}Please b");
        assert_eq!(items, vec!["Fix a\u{1f}Please b"]);
    }

    #[test]
    fn test_marker_only_lines_skipped() {
        let text = "-\n12.\n***\nTest the parser";
        assert_eq!(extract_action_items(text), "- [ ] Test the parser");
    }
}
