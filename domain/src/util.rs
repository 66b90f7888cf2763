//! Shared utility functions.

/// Keep at most `max_chars` characters of `s`, appending `"..."` when
/// anything was cut.
///
/// Counts `char`s, so multi-byte text is never split mid-character.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &s[..end]),
        None => s.to_string(),
    }
}
