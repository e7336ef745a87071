//! Dyslexia formatting: short single-idea lines with hyphenated long words.

use crate::{clauses, fragment, hyphenate, text};

/// Separator between output lines: one blank line.
pub const LINE_SEPARATOR: &str = "\n\n";

/// Restructure text into one short sentence per line.
///
/// Sentences are split into clauses, fragments under three words are dropped,
/// survivors are capitalized, terminated and hyphenated, and the lines are
/// joined with a blank line between each. Sentence order and clause order are
/// preserved.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn restructure(text: &str) -> String {
    let lines: Vec<String> = text::split_sentences(text)
        .iter()
        .flat_map(|sentence| clauses::split_clauses(sentence))
        .filter_map(|part| fragment::normalize_fragment(&part))
        .map(|line| hyphenate::hyphenate_text(&line))
        .collect();

    tracing::debug!(lines = lines.len(), "restructured text");
    lines.join(LINE_SEPARATOR)
}
