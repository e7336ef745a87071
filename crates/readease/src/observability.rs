//! Logging setup: human-readable stderr output plus optional JSONL files.
//!
//! Stdout is reserved for command output (and the MCP protocol under
//! `serve`), so every log line goes to stderr or a file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Explicit log file path.
const ENV_LOG_PATH: &str = "READEASE_LOG_PATH";

/// Directory for daily-rotated log files.
const ENV_LOG_DIR: &str = "READEASE_LOG_DIR";

/// File name prefix for rotated logs.
const LOG_FILE_PREFIX: &str = "readease";

/// Where JSONL logs are written, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to exactly this file.
    File(PathBuf),
    /// Daily-rotated `readease.<date>.jsonl` files in this directory.
    Dir(PathBuf),
}

/// Resolved logging destinations.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// JSONL file output. `None` keeps logging on stderr only.
    pub log_target: Option<LogTarget>,
}

impl ObservabilityConfig {
    /// Resolve the log target from the environment, falling back to the
    /// configured log directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self {
            log_target: resolve_log_target(
                std::env::var_os(ENV_LOG_PATH).map(PathBuf::from),
                std::env::var_os(ENV_LOG_DIR).map(PathBuf::from),
                config_log_dir,
            ),
        }
    }
}

/// First match wins: explicit file, then env directory, then config directory.
fn resolve_log_target(
    log_path: Option<PathBuf>,
    log_dir: Option<PathBuf>,
    config_log_dir: Option<PathBuf>,
) -> Option<LogTarget> {
    let non_empty = |p: &PathBuf| !p.as_os_str().is_empty();
    log_path
        .filter(non_empty)
        .map(LogTarget::File)
        .or_else(|| log_dir.filter(non_empty).map(LogTarget::Dir))
        .or_else(|| config_log_dir.filter(non_empty).map(LogTarget::Dir))
}

/// Level name implied by the CLI flags, or `default_level` when none apply.
fn flag_level(quiet: bool, verbose: u8, default_level: &str) -> &str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => default_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Build the global filter. `RUST_LOG` takes precedence over flags and config.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some()
        && let Ok(filter) = EnvFilter::try_from_default_env()
    {
        return filter;
    }
    EnvFilter::new(flag_level(quiet, verbose, default_level))
}

/// Ceiling for the stderr layer: warnings by default, more with `-v`.
pub const fn stderr_level(quiet: bool, verbose: u8) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

/// Install the global subscriber.
///
/// Returns the file writer's guard when file logging is on; dropping it
/// flushes pending lines.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
    stderr_ceiling: LevelFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(stderr_ceiling);

    let (file_layer, guard) = match config.log_target {
        Some(ref target) => {
            let appender = file_appender(target)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

fn file_appender(target: &LogTarget) -> anyhow::Result<RollingFileAppender> {
    match target {
        LogTarget::File(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("log path has no file name: {}", path.display()))?;
            create_dir(dir)?;
            Ok(tracing_appender::rolling::never(dir, file_name))
        }
        LogTarget::Dir(dir) => {
            create_dir(dir)?;
            RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(LOG_FILE_PREFIX)
                .filename_suffix("jsonl")
                .build(dir)
                .with_context(|| format!("failed to open log directory {}", dir.display()))
        }
    }
}

fn create_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))
}
