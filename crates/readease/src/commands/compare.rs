//! Compare command: readability of two files side by side.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use readease_core::metrics;

use super::{read_input_file, render_metrics_table};

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Original text.
    pub before: Utf8PathBuf,

    /// Transformed text.
    pub after: Utf8PathBuf,
}

/// Print the metrics table for two files, without transforming either.
#[instrument(name = "cmd_compare", skip_all, fields(before = %args.before, after = %args.after))]
pub fn cmd_compare(
    args: CompareArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!("executing compare command");

    let before = read_input_file(&args.before, max_input_bytes)?;
    let after = read_input_file(&args.after, max_input_bytes)?;
    let report = metrics::compare(&before, &after);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_metrics_table(&report));
    }

    Ok(())
}
