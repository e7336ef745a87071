//! Serve command: MCP server on stdio.

use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use rmcp::{ServiceExt, transport::stdio};
use tracing::{info, instrument};

use readease_core::Simplifier;

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // Transport is always stdio; nothing to configure yet
}

/// Run the MCP server until the client disconnects.
///
/// Stdout carries the protocol, so all diagnostics go through tracing.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    simplifier: Arc<dyn Simplifier>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    info!(simplifier = simplifier.name(), "starting MCP server on stdio");

    let service = ProjectServer::new(simplifier, max_input_bytes)
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;

    let reason = service
        .waiting()
        .await
        .context("MCP server task failed")?;
    info!(?reason, "MCP server stopped");

    Ok(())
}
