//! readease CLI
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use readease::commands::process::ProcessOptions;
use readease::{Cli, Commands, commands};
use readease_core::config::ConfigLoader;
use readease_core::simplify;
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = camino::Utf8PathBuf::try_from(cwd).map_err(|e| {
        anyhow::anyhow!(
            "current directory is not valid UTF-8: {}",
            e.into_path_buf().display()
        )
    })?;
    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(ref config_path) = cli.config {
        let config_path = camino::Utf8PathBuf::try_from(config_path.clone()).map_err(|e| {
            anyhow::anyhow!(
                "config path is not valid UTF-8: {}",
                e.into_path_buf().display()
            )
        })?;
        loader = loader.with_file(&config_path);
    }
    let (config, config_sources) = loader.load().context("failed to load configuration")?;

    let obs_config = observability::ObservabilityConfig::from_env_with_overrides(
        config
            .log_dir
            .as_ref()
            .map(|dir| dir.as_std_path().to_path_buf()),
    );
    let env_filter = observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    let _guard = observability::init_observability(
        &obs_config,
        env_filter,
        observability::stderr_level(cli.quiet, cli.verbose),
    )
    .context("failed to initialize logging/tracing")?;

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        color = ?cli.color,
        chdir = ?cli.chdir,
        "CLI initialized"
    );

    let max_input = config.input_limit();
    let simplifier = simplify::from_config(config.simplifier.as_ref());

    // Execute command
    let result = match cli.command {
        Some(Commands::Score(args)) => commands::score::cmd_score(args, cli.json, max_input),
        Some(Commands::Compare(args)) => commands::compare::cmd_compare(args, cli.json, max_input),
        Some(Commands::Info(args)) => {
            commands::info::cmd_info(args, cli.json, &config, &config_sources)
        }
        #[cfg(feature = "mcp")]
        Some(Commands::Serve(args)) => {
            let rt = tokio::runtime::Runtime::new()
                .context("failed to create async runtime for MCP server")?;
            rt.block_on(commands::serve::cmd_serve(
                args,
                std::sync::Arc::from(simplifier),
                max_input,
            ))
        }
        None => commands::process::cmd_process(
            cli.process,
            ProcessOptions {
                json: cli.json,
                quiet: cli.quiet,
                always_metrics: config.metrics,
                max_input_bytes: max_input,
            },
            simplifier.as_ref(),
        ),
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}
