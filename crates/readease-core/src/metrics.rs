//! Before/after readability comparison.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::readability::{self, MetricsSnapshot, round2};

/// Field-wise difference `after - before`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct MetricsDelta {
    /// Exact signed change in word count.
    pub word_count: i64,
    /// Change in words per sentence, rounded to 2 decimals.
    pub avg_sentence_length: f64,
    /// Change in Flesch Reading Ease, rounded to 2 decimals.
    pub flesch_reading_ease: f64,
}

/// Readability of the original text, the transformed text, and the change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MetricsReport {
    /// Snapshot of the original text.
    pub before: MetricsSnapshot,
    /// Snapshot of the transformed text.
    pub after: MetricsSnapshot,
    /// `after - before`.
    pub change: MetricsDelta,
}

/// Compare the readability of two texts.
///
/// The change in average sentence length is taken from the unrounded
/// averages; the snapshots in the report are rounded for display.
#[tracing::instrument(skip_all, fields(before_len = before.len(), after_len = after.len()))]
pub fn compare(before: &str, after: &str) -> MetricsReport {
    let before = readability::score(before);
    let after = readability::score(after);

    let change = MetricsDelta {
        word_count: signed(after.word_count) - signed(before.word_count),
        avg_sentence_length: round2(after.avg_sentence_length - before.avg_sentence_length),
        flesch_reading_ease: round2(after.flesch_reading_ease - before.flesch_reading_ease),
    };

    MetricsReport {
        before: before.rounded(),
        after: after.rounded(),
        change,
    }
}

fn signed(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}
