//! Fragment normalization: length filter, capitalization, terminal punctuation.

use crate::text;

/// Fragments with fewer whitespace-delimited words than this are dropped.
pub const MIN_FRAGMENT_WORDS: usize = 3;

/// Turn a clause fragment into an output line, or drop it.
///
/// Returns `None` for fragments under [`MIN_FRAGMENT_WORDS`] words. Survivors
/// get an uppercase first character (the rest is left alone) and a trailing
/// `.` unless they already end in `.`, `!` or `?`.
pub fn normalize_fragment(fragment: &str) -> Option<String> {
    if text::whitespace_word_count(fragment) < MIN_FRAGMENT_WORDS {
        return None;
    }
    Some(ensure_sentence_end(&capitalize_first(fragment)))
}

/// Uppercase the first character, leaving the rest unchanged.
pub fn capitalize_first(fragment: &str) -> String {
    let mut chars = fragment.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Trim and append `.` unless the text already ends in terminal punctuation.
pub fn ensure_sentence_end(fragment: &str) -> String {
    let trimmed = fragment.trim();
    match trimmed.chars().last() {
        Some('.' | '!' | '?') | None => trimmed.to_string(),
        Some(_) => format!("{trimmed}."),
    }
}
