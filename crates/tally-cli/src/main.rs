//! Tally CLI application
//!
//! Command-line interface and MCP server for the Tally project tracker.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, TallyMcpServer};
use renderer::TerminalRenderer;
use tally_core::TrackerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        user,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .with_user(user)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Tally started for user '{}'", tracker.user_id());

    match command {
        Some(Project { command }) => {
            Cli::new(tracker, renderer)
                .handle_project_command(command)
                .await
        }
        Some(Task { command }) => {
            Cli::new(tracker, renderer)
                .handle_task_command(command)
                .await
        }
        Some(Calendar(args)) => Cli::new(tracker, renderer).calendar(args).await,
        Some(Stats) => Cli::new(tracker, renderer).stats().await,
        Some(Export) => Cli::new(tracker, renderer).export().await,
        Some(Serve) => {
            info!("Starting Tally MCP server");
            run_stdio_server(TallyMcpServer::new(tracker))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(tracker, renderer).overview().await,
    }
}
