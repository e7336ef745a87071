//! Core library for readease.
//!
//! Restructures simplified text for reading accessibility needs and scores
//! readability before and after. Every text function here is pure and
//! deterministic; the only fallible step is the external [`simplify`] call.
//!
//! # Modules
//!
//! - [`text`] - Sentence segmentation and word extraction
//! - [`clauses`] - Clause splitting on conjunctions and relative markers
//! - [`fragment`] - Fragment filtering, capitalization and punctuation
//! - [`hyphenate`] - Long-word hyphenation
//! - [`syllables`] - Heuristic syllable counting
//! - [`readability`] - Flesch Reading Ease scoring
//! - [`metrics`] - Before/after comparison
//! - [`modes`] - Accessibility modes and the restructuring pipeline
//! - [`simplify`] - The external simplifier boundary
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use readease_core::{Mode, Passthrough, compare, process_text};
//!
//! let original = "The cat sat on the mat and the dog slept by the door.";
//! let output = process_text(original, Mode::Dyslexia, &Passthrough).unwrap();
//! assert_eq!(output, "The cat sat on the mat.\n\nThe dog slept by the door.");
//!
//! let report = compare(original, &output);
//! assert_eq!(report.change.word_count, 0);
//! ```
#![deny(unsafe_code)]

pub mod clauses;
pub mod config;
pub mod error;
pub mod fragment;
pub mod hyphenate;
pub mod metrics;
pub mod modes;
pub mod readability;
pub mod simplify;
pub mod syllables;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel, SimplifierConfig};
pub use error::{ConfigError, ConfigResult, SimplifyError, SimplifyResult};
pub use metrics::{MetricsDelta, MetricsReport, compare};
pub use modes::{Mode, format_for_mode, process_text};
pub use readability::{MetricsSnapshot, score};
pub use simplify::{CommandSimplifier, Passthrough, SentenceWise, Simplifier};

/// Default input size limit: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
