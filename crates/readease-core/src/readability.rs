//! Readability scoring using Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher score = easier text. Scores are not clamped, so very simple text can
//! exceed 100 and dense text can go negative.
//!
//! Sentences come from [`text::split_sentences`], words from
//! [`text::extract_words`], syllables from [`syllables::count_syllables`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::syllables;
use crate::text;

/// Readability figures for one piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct MetricsSnapshot {
    /// Number of alphabetic words.
    pub word_count: usize,
    /// Words per sentence (0 when there are no sentences).
    pub avg_sentence_length: f64,
    /// Flesch Reading Ease, rounded to 2 decimals (0 for empty text).
    pub flesch_reading_ease: f64,
}

impl MetricsSnapshot {
    /// Copy with `avg_sentence_length` rounded to 2 decimals for display.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            avg_sentence_length: round2(self.avg_sentence_length),
            ..self
        }
    }
}

/// Score a text.
///
/// Empty or whitespace-only text scores all zeros rather than failing.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn score(text: &str) -> MetricsSnapshot {
    let sentences = text::split_sentences(text).len();
    let words = text::extract_words(text);
    let word_count = words.len();
    let syllables: usize = words.iter().map(|w| syllables::count_syllables(w)).sum();

    let avg_sentence_length = if sentences == 0 {
        0.0
    } else {
        word_count as f64 / sentences as f64
    };

    let flesch_reading_ease = if sentences == 0 || word_count == 0 {
        0.0
    } else {
        flesch(avg_sentence_length, syllables as f64 / word_count as f64)
    };

    tracing::debug!(
        sentences,
        word_count,
        syllables,
        flesch_reading_ease,
        "scored text"
    );

    MetricsSnapshot {
        word_count,
        avg_sentence_length,
        flesch_reading_ease,
    }
}

/// Flesch Reading Ease from its two ratios, rounded to 2 decimals.
// Evaluated term by term so results match the published formula exactly.
#[allow(clippy::suboptimal_flops)]
fn flesch(words_per_sentence: f64, syllables_per_word: f64) -> f64 {
    round2(206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word)
}

/// Round to 2 decimal places.
///
/// Ties go to even on the exact binary value, so `103.625` becomes `103.62`
/// and `2.675` (stored just below) becomes `2.67`.
pub(crate) fn round2(v: f64) -> f64 {
    format!("{v:.2}").parse().unwrap_or(v)
}
