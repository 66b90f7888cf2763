//! Deterministic note summary

use crate::util::truncate_chars;

/// First sentence of `text`, capped at `max_chars` characters.
///
/// The sentence runs up to and including the first `.`; a leading `.` does
/// not count, in which case the whole text is used. Blank input yields `""`.
pub fn first_sentence(text: &str, max_chars: usize) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let candidate = match text.find('.') {
        Some(dot) if dot > 0 => &text[..=dot],
        _ => text,
    };

    truncate_chars(candidate, max_chars)
}
