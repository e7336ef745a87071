//! Score command: Flesch Reading Ease of a single file.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use readease_core::readability;

use super::read_input_file;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// File to score.
    pub file: Utf8PathBuf,
}

/// Print word count, average sentence length and Flesch Reading Ease.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing score command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let snapshot = readability::score(&content).rounded();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", args.file.bold());
        println!("{}: {}", "Word count".dimmed(), snapshot.word_count);
        println!(
            "{}: {:.2}",
            "Avg sentence length".dimmed(),
            snapshot.avg_sentence_length
        );
        println!(
            "{}: {:.2}",
            "Flesch Reading Ease".dimmed(),
            snapshot.flesch_reading_ease
        );
    }

    Ok(())
}
