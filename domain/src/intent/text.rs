//! Text heuristics shared by the resolvers.
//!
//! Pure string scanning, no I/O.

use regex::Regex;
use std::sync::LazyLock;

static DIGITS: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[0-9]+").ok());

/// Normalize an input line for rule matching (trim + lowercase).
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Byte offset of the first ASCII case-insensitive occurrence of `keyword`.
///
/// Keywords are ASCII, so a match always starts and ends on a char boundary.
pub fn find_keyword(text: &str, keyword: &str) -> Option<usize> {
    let needle = keyword.as_bytes();
    if needle.is_empty() {
        return Some(0);
    }
    text.as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}

/// Text following the first occurrence of `keyword`, trimmed.
///
/// Returns an empty string when the keyword does not occur.
pub fn text_after_keyword<'a>(text: &'a str, keyword: &str) -> &'a str {
    match find_keyword(text, keyword) {
        Some(start) => text[start + keyword.len()..].trim(),
        None => "",
    }
}

/// First run of ASCII digits in `text`, parsed as an integer.
///
/// `None` when there are no digits or the run does not fit in an `i64`.
pub fn first_integer(text: &str) -> Option<i64> {
    DIGITS.as_ref()?.find(text)?.as_str().parse().ok()
}
