//! Accessibility modes applied to simplified text.
//!
//! - [`Mode::Dyslexia`] runs the restructuring pipeline in [`dyslexia`].
//! - [`Mode::Adhd`] and [`Mode::Autism`] are not implemented yet; they
//!   prefix the text with a marker line and return it otherwise untouched.

pub mod dyslexia;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SimplifyResult;
use crate::simplify::Simplifier;

/// Marker line emitted by the ADHD placeholder.
pub const ADHD_PLACEHOLDER: &str = "[ADHD Mode - Formatting coming soon]";

/// Marker line emitted by the autism placeholder.
pub const AUTISM_PLACEHOLDER: &str = "[Autism Mode - Formatting coming soon]";

/// Which post-processing transform runs on simplified text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Mode {
    /// Short single-idea lines with hyphenated long words.
    Dyslexia,
    /// Placeholder: marker line plus unmodified text.
    Adhd,
    /// Placeholder: marker line plus unmodified text.
    Autism,
}

impl Mode {
    /// Returns the mode name as used on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dyslexia => "dyslexia",
            Self::Adhd => "adhd",
            Self::Autism => "autism",
        }
    }

    /// Whether this mode has a real implementation.
    pub const fn is_implemented(&self) -> bool {
        matches!(self, Self::Dyslexia)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Apply the transform for `mode` to already simplified text.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn format_for_mode(mode: Mode, text: &str) -> String {
    match mode {
        Mode::Dyslexia => dyslexia::restructure(text),
        Mode::Adhd => format_for_adhd(text),
        Mode::Autism => format_for_autism(text),
    }
}

/// ADHD placeholder: marker line, then the text unchanged.
pub fn format_for_adhd(text: &str) -> String {
    format!("{ADHD_PLACEHOLDER}\n{text}")
}

/// Autism placeholder: marker line, then the text unchanged.
pub fn format_for_autism(text: &str) -> String {
    format!("{AUTISM_PLACEHOLDER}\n{text}")
}

/// Simplify `text`, then format it for `mode`.
#[tracing::instrument(skip(text, simplifier), fields(text_len = text.len(), simplifier = simplifier.name()))]
pub fn process_text(text: &str, mode: Mode, simplifier: &dyn Simplifier) -> SimplifyResult<String> {
    let simplified = simplifier.simplify(text)?;
    tracing::debug!(simplified_len = simplified.len(), "simplification finished");
    Ok(format_for_mode(mode, &simplified))
}
