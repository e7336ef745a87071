//! Clause splitting on conjunctions and relative-clause markers.
//!
//! A sentence is cut wherever one of [`MARKERS`] appears as a whole word,
//! optionally preceded by a comma. Most markers are pure separators and
//! vanish; "often" and "also" open the following clause instead.

use regex::Regex;
use std::sync::LazyLock;

/// Clause-boundary markers, matched case-insensitively as whole words.
pub const MARKERS: &[&str] = &[
    "and", "but", "which", "that", "because", "although", "however", "often", "also",
];

/// Markers kept as the opening word of the clause that follows them.
const REATTACHING_MARKERS: &[&str] = &["often", "also"];

/// Marker with optional leading comma and surrounding whitespace.
static MARKER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*,?\s*\b(and|but|which|that|because|although|however|often|also)\b\s*")
        .expect("valid regex")
});

/// Split a sentence into single-idea fragments.
///
/// Fragments come back trimmed and in sentence order. Length filtering and
/// punctuation are left to [`crate::fragment::normalize_fragment`].
#[tracing::instrument(skip_all, fields(sentence_len = sentence.len()))]
pub fn split_clauses(sentence: &str) -> Vec<String> {
    let parts = split_on_markers(sentence);
    let mut fragments = Vec::new();
    let mut i = 0;

    while i < parts.len() {
        let part = parts[i].trim();
        let lower = part.to_lowercase();

        if !part.is_empty() && !is_marker(&lower) {
            fragments.push(part.to_string());
        } else if REATTACHING_MARKERS.contains(&lower.as_str())
            && let Some(next) = parts.get(i + 1).map(|p| p.trim())
            && !next.is_empty()
        {
            fragments.push(format!("{} {next}", capitalize_marker(part)));
            i += 1;
        }

        i += 1;
    }

    tracing::trace!(fragments = fragments.len(), "split clauses");
    fragments
}

/// Whether `word` is one of the clause markers (expects lowercase input).
pub fn is_marker(word: &str) -> bool {
    MARKERS.contains(&word)
}

/// Alternating content and marker parts, content first.
///
/// Content between adjacent markers comes through as an empty part.
fn split_on_markers(sentence: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut last = 0;

    for caps in MARKER_PATTERN.captures_iter(sentence) {
        let (Some(whole), Some(marker)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        parts.push(&sentence[last..whole.start()]);
        parts.push(marker.as_str());
        last = whole.end();
    }

    parts.push(&sentence[last..]);
    parts
}

/// First letter uppercase, the rest lowercase.
fn capitalize_marker(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}
