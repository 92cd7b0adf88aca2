//! Plant Whisperer CLI Application
//!
//! Command-line interface for identifying plants and reading their care
//! instructions.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use whisperer_core::Config;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config_file,
        api_key,
        endpoint,
        timeout,
        no_color,
        command,
    } = Args::parse();

    let mut config = Config::load(config_file.as_deref()).context("Failed to load configuration")?;
    if let Some(api_key) = api_key {
        config.api_key = Some(api_key);
    }
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint;
    }
    if let Some(timeout) = timeout {
        config.timeout_secs = timeout;
    }

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(config, renderer);

    info!("Plant Whisperer started");

    match command {
        Some(Scan(args)) => cli.scan(args).await,
        Some(Care(args)) => cli.care(&args),
        Some(Families) => cli.families(),
        None => cli.welcome(),
    }
}
