//! Bullet point conversion.

use super::sentences::split_sentences;

/// Returned when the input holds no sentence at all
pub const EMPTY_BULLETS: &str = "No content to convert.";

const BULLET: &str = "•";

/// Render each sentence as a bullet, dropping one trailing period
pub fn to_bullet_points(text: &str) -> String {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return EMPTY_BULLETS.to_string();
    }

    sentences
        .iter()
        .map(|sentence| {
            let body = sentence.strip_suffix('.').unwrap_or(sentence.as_str());
            format!("{} {}", BULLET, body)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
