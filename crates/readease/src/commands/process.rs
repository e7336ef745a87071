//! Default command: simplify a file, format it for a mode, print the result.

use std::time::Duration;

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use serde::Serialize;
use tracing::{debug, info, instrument};

use readease_core::{MetricsReport, Mode, Simplifier, compare, process_text};

use super::{read_input_file, render_metrics_table};

/// Input file and mode for the top-level transform.
#[derive(Args, Debug, Default)]
pub struct ProcessArgs {
    /// File containing the text to process.
    #[arg(long, requires = "mode", value_name = "PATH")]
    pub input: Option<Utf8PathBuf>,

    /// Accessibility mode to format for.
    #[arg(long, value_enum, requires = "input")]
    pub mode: Option<Mode>,

    /// Print a readability comparison after the output.
    #[arg(long)]
    pub metrics: bool,
}

/// Settings for the transform that come from outside its own arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessOptions {
    /// Global `--json` flag.
    pub json: bool,
    /// Global `--quiet` flag; also hides the spinner.
    pub quiet: bool,
    /// Config `metrics` flag.
    pub always_metrics: bool,
    /// Input size limit in bytes.
    pub max_input_bytes: Option<usize>,
}

#[derive(Serialize)]
struct ProcessOutput<'a> {
    mode: Mode,
    output: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<MetricsReport>,
}

/// Simplify the input file, format it for the requested mode and print it.
#[instrument(name = "cmd_process", skip_all, fields(input = ?args.input, mode = ?args.mode))]
pub fn cmd_process(
    args: ProcessArgs,
    options: ProcessOptions,
    simplifier: &dyn Simplifier,
) -> anyhow::Result<()> {
    let (Some(input), Some(mode)) = (args.input, args.mode) else {
        bail!("both --input and --mode are required");
    };
    debug!(%input, %mode, simplifier = simplifier.name(), "executing process command");

    let original = read_input_file(&input, options.max_input_bytes)?;

    let spinner = (!options.quiet).then(|| simplify_spinner(simplifier.name()));
    let result = process_text(&original, mode, simplifier);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let output = result.with_context(|| format!("failed to process {input}"))?;

    let metrics = (args.metrics || options.always_metrics).then(|| compare(&original, &output));
    info!(mode = %mode, output_len = output.len(), "processed text");

    if options.json {
        let doc = ProcessOutput {
            mode,
            output: &output,
            metrics,
        };
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("{output}");
        if let Some(report) = metrics {
            println!("{}", render_metrics_table(&report));
        }
    }

    Ok(())
}

/// Spinner on stderr while the simplifier runs. Hidden when stderr is not a
/// terminal.
fn simplify_spinner(name: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_draw_target(ProgressDrawTarget::stderr());
    pb.set_message(format!("simplifying with {name}"));
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
