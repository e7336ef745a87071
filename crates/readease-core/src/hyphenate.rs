//! Long-word hyphenation using a VC-CV syllable-boundary heuristic.
//!
//! This is not a dictionary hyphenator. Breaks land between two consonants
//! flanked by vowels (`y` counts as a vowel here), which is often wrong
//! linguistically; the output is stable and predictable instead.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Clean forms at or below this many characters are never hyphenated.
pub const MAX_UNHYPHENATED_LEN: usize = 6;

/// Everything that is neither a word character nor whitespace.
static NON_WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

/// Vowel, consonant | consonant, vowel.
static VCCV_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([aeiouy][^aeiouy])([^aeiouy][aeiouy])").expect("valid regex")
});

/// Hyphenate every long word in a line of text.
///
/// The line is split on single spaces, so runs of spaces survive untouched.
/// Leading and trailing punctuation on a word is preserved.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn hyphenate_text(text: &str) -> String {
    text.split(' ')
        .map(hyphenate_piece)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Insert hyphens into a clean word (no punctuation).
///
/// One left-to-right pass of non-overlapping matches; already split segments
/// are not revisited.
pub fn hyphenate_word(word: &str) -> String {
    if word.chars().count() <= MAX_UNHYPHENATED_LEN {
        return word.to_string();
    }
    VCCV_PATTERN.replace_all(word, "${1}-${2}").into_owned()
}

fn hyphenate_piece(piece: &str) -> Cow<'_, str> {
    let clean = NON_WORD_PATTERN.replace_all(piece, "");
    if clean.chars().count() <= MAX_UNHYPHENATED_LEN {
        return Cow::Borrowed(piece);
    }

    // Punctuation inside the word means the clean form never occurs in the
    // piece, and the piece comes back as is.
    let hyphenated = hyphenate_word(&clean);
    Cow::Owned(piece.replace(clean.as_ref(), &hyphenated))
}
