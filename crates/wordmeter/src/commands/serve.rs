//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::{ServiceExt, transport::stdio};
use tracing::{info, instrument};

use wordmeter_core::Config;

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Serve MCP requests on stdin/stdout until the client disconnects.
///
/// Logging must stay on stderr (or a file); stdout carries the protocol.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input_bytes: Option<usize>,
    mut config: Config,
) -> anyhow::Result<()> {
    // The resolved limit wins so the server and CLI agree on what is too large.
    config.max_input_bytes = max_input_bytes;
    config.disable_input_limit = max_input_bytes.is_none();

    info!("starting MCP server on stdio");
    let service = ProjectServer::with_config(config)
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await.context("MCP server terminated abnormally")?;
    info!("MCP server stopped");

    Ok(())
}
