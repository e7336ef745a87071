//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use readease_core::Mode;
use readease_core::config::{Config, ConfigSources};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
    modes: Vec<ModeInfo>,
}

#[derive(Serialize)]
struct ModeInfo {
    name: &'static str,
    implemented: bool,
}

impl PackageInfo {
    fn new() -> Self {
        let modes = [Mode::Dyslexia, Mode::Adhd, Mode::Autism]
            .into_iter()
            .map(|mode| ModeInfo {
                name: mode.as_str(),
                implemented: mode.is_implemented(),
            })
            .collect();
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
            modes,
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    metrics: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    simplifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    per_sentence: Option<bool>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let simplifier = config.simplifier.as_ref().map_or_else(
            || "passthrough".to_string(),
            |s| {
                std::iter::once(s.command.as_str())
                    .chain(s.args.iter().map(String::as_str))
                    .collect::<Vec<_>>()
                    .join(" ")
            },
        );
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            metrics: config.metrics,
            max_input_bytes: config.input_limit(),
            simplifier,
            per_sentence: config.simplifier.as_ref().map(|s| s.per_sentence),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!("{} {}", package.name.bold(), package.version.green());
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), package.license);
    }
    if !package.repository.is_empty() {
        println!("{}: {}", "Repository".dimmed(), package.repository.cyan());
    }

    println!();
    println!("{}", "Modes".bold().underline());
    for mode in &package.modes {
        if mode.implemented {
            println!("{}", mode.name);
        } else {
            println!("{} {}", mode.name, "(placeholder)".dimmed());
        }
    }

    let config_info = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    match config_info.config_file {
        Some(ref path) => println!("{}: {}", "Config file".dimmed(), path.cyan()),
        None => println!("{}: {}", "Config file".dimmed(), "none loaded".yellow()),
    }
    println!("{}: {}", "Log level".dimmed(), config_info.log_level);
    if let Some(ref dir) = config_info.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }
    println!("{}: {}", "Always show metrics".dimmed(), config_info.metrics);
    match config_info.max_input_bytes {
        Some(limit) => println!("{}: {} bytes", "Input limit".dimmed(), limit),
        None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
    }
    println!("{}: {}", "Simplifier".dimmed(), config_info.simplifier);
    if let Some(per_sentence) = config_info.per_sentence {
        println!("{}: {}", "Per sentence".dimmed(), per_sentence);
    }

    Ok(())
}
