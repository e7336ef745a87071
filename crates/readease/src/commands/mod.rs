//! Command implementations.

use std::fmt::Write as _;

use anyhow::{Context, bail};
use camino::Utf8Path;
use owo_colors::{OwoColorize, Stream};
use readease_core::MetricsReport;

pub mod compare;
pub mod info;
pub mod process;
pub mod score;
#[cfg(feature = "mcp")]
pub mod serve;

/// Width of the metric label column.
const LABEL_WIDTH: usize = 25;

/// Width of each numeric column.
const VALUE_WIDTH: usize = 10;

/// Read an input file, rejecting missing paths and oversized files.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if !path.exists() {
        bail!("File not found: {path}");
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

/// Render a before/after/change table.
///
/// The layout is fixed-width: a 25-column label and three 10-column values,
/// with signed changes.
pub fn render_metrics_table(report: &MetricsReport) -> String {
    let rule = "-".repeat(LABEL_WIDTH + 3 * VALUE_WIDTH + 2);
    let title = "--- Readability Metrics ---";
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "\n{}",
        title.if_supports_color(Stream::Stdout, |t| t.bold())
    );
    let _ = writeln!(
        out,
        "{:<LABEL_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$}",
        "Metric", "Before", "After", "Change"
    );
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{:<LABEL_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$} {:>+VALUE_WIDTH$}",
        "Word count", report.before.word_count, report.after.word_count, report.change.word_count
    );
    let _ = writeln!(
        out,
        "{:<LABEL_WIDTH$} {:>VALUE_WIDTH$.2} {:>VALUE_WIDTH$.2} {:>+VALUE_WIDTH$.2}",
        "Avg sentence length",
        report.before.avg_sentence_length,
        report.after.avg_sentence_length,
        report.change.avg_sentence_length
    );
    let _ = writeln!(
        out,
        "{:<LABEL_WIDTH$} {:>VALUE_WIDTH$.2} {:>VALUE_WIDTH$.2} {:>+VALUE_WIDTH$.2}",
        "Flesch Reading Ease",
        report.before.flesch_reading_ease,
        report.after.flesch_reading_ease,
        report.change.flesch_reading_ease
    );
    let _ = write!(out, "{rule}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use readease_core::compare;

    #[test]
    fn table_layout_matches_fixed_widths() {
        owo_colors::set_override(false);
        let report = compare("The cat sat on the mat. The dog ran.", "Cats nap.");
        let table = render_metrics_table(&report);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "--- Readability Metrics ---");
        assert_eq!(
            lines[2],
            "Metric                        Before      After     Change"
        );
        assert_eq!(lines[3], "-".repeat(57));
        assert_eq!(
            lines[4],
            "Word count                         9          2         -7"
        );
        assert_eq!(
            lines[5],
            "Avg sentence length             4.50       2.00      -2.50"
        );
        assert!(lines[6].starts_with("Flesch Reading Ease"));
        assert_eq!(lines[7], "-".repeat(57));
    }

    #[test]
    fn zero_change_is_signed() {
        owo_colors::set_override(false);
        let report = compare("The cat sat on the mat.", "The cat sat on the mat.");
        let table = render_metrics_table(&report);
        assert!(table.contains("         +0\n"));
        assert!(table.contains("      +0.00\n"));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = read_input_file(Utf8Path::new("/no/such/readease/input.txt"), None).unwrap_err();
        assert_eq!(err.to_string(), "File not found: /no/such/readease/input.txt");
    }

    #[test]
    fn oversized_file_is_rejected() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "The cat sat on the mat.").unwrap();
        let path = Utf8Path::from_path(tmp.path()).unwrap();

        assert!(read_input_file(path, Some(4)).is_err());
        assert_eq!(read_input_file(path, None).unwrap(), "The cat sat on the mat.");
    }
}
