//! Clarity rewriting.
//!
//! Replaces wordy phrases with shorter equivalents and normalizes whitespace.
//! Substitutions run in a fixed order since later patterns see the output of
//! earlier ones.
//!
//! A single pass is not always a fixed point. Dropping "very" or collapsing a
//! line break can join the pieces of an earlier phrase: "in order very to"
//! becomes "in order to", which only a second pass shortens to "to".

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::trace;

/// Ordered (pattern, replacement) pairs, all case-insensitive and word-bounded
const REPLACEMENTS: &[(&str, &str)] = &[
    (r"(?i)\butilize\b", "use"),
    (r"(?i)\bin order to\b", "to"),
    (r"(?i)\bdue to the fact that\b", "because"),
    (r"(?i)\bat this point in time\b", "now"),
    (r"(?i)\bvery\s+", ""),
];

static COMPILED_REPLACEMENTS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    REPLACEMENTS
        .iter()
        .map(|(pattern, replacement)| {
            (
                Regex::new(pattern).expect("Invalid regex: clarity replacement"),
                *replacement,
            )
        })
        .collect()
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex: whitespace run"));

/// Rewrite text for clarity. Blank input is returned untouched.
pub fn improve_clarity(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    let mut refined = text.to_string();
    for (pattern, replacement) in COMPILED_REPLACEMENTS.iter() {
        let replaced = pattern.replace_all(&refined, *replacement);
        if let Cow::Owned(updated) = replaced {
            trace!(pattern = pattern.as_str(), "Clarity substitution applied");
            refined = updated;
        }
    }

    WHITESPACE_RUN.replace_all(&refined, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_improve_clarity_replaces_phrases() {
        let original = "We utilize this in order to improve quality at this point in time.";
        assert_eq!(improve_clarity(original), "We use this to improve quality now.");
    }

    #[test]
    fn test_blank_input_returned_verbatim() {
        assert_eq!(improve_clarity(""), "");
        assert_eq!(improve_clarity("  \n\t "), "  \n\t ");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            improve_clarity("UTILIZE it Due To The Fact That it works."),
            "use it because it works."
        );
    }

    #[test]
    fn test_whole_words_only() {
        assert_eq!(
            improve_clarity("Underutilized servers utilizes nothing."),
            "Underutilized servers utilizes nothing."
        );
    }

    #[test]
    fn test_very_runs_removed() {
        assert_eq!(
            improve_clarity("A very very   big and Very\nfast build."),
            "A big and fast build."
        );
        // Only "very" followed by whitespace is dropped
        assert_eq!(
            improve_clarity("Thanks very much, every one, very."),
            "Thanks much, every one, very."
        );
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(improve_clarity("  line one\n\n line   two \t"), "line one line two");
    }

    #[test]
    fn test_removed_very_can_form_phrase() {
        let once = improve_clarity("Plan in order very to win.");
        assert_eq!(once, "Plan in order to win.");
        assert_eq!(improve_clarity(&once), "Plan to win.");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "We utilize this in order to improve quality at this point in time.",
            "very very in order to in order to",
            "  spaced\n\nout   text  ",
            "Due to the fact that at this point in time we utilize very old tools.",
        ];
        for sample in samples {
            let once = improve_clarity(sample);
            assert_eq!(improve_clarity(&once), once, "Not idempotent for '{}'", sample);
        }
    }
}
