use std::path::Path;

use anyhow::Context;
use mdrop_core::config::AppConfig;
use tracing::{info, warn};

use super::config::{default_config_path, load_config};
use super::tracing::init_tracing_subscriber;
use super::wiring::wire_dependencies;
use crate::cli::Cli;
use crate::commands;

/// Load the config file, treating a missing file as an empty config.
///
/// A file that exists but cannot be parsed is still an error.
pub fn load_config_or_empty(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let Some(path) = path else {
        warn!("No config directory on this platform, using built-in defaults");
        return Ok(AppConfig::empty());
    };

    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using built-in defaults");
        return Ok(AppConfig::empty());
    }

    load_config(path)
}

/// Entry point for the `minidrop` binary.
///
/// Sets up tracing, loads configuration, wires dependencies and runs the
/// requested command on a fresh multi-threaded runtime.
pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    if let Err(err) = init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    let config_path = cli.config.clone().or_else(default_config_path);
    let config = load_config_or_empty(config_path.as_deref())?;
    let deps = wire_dependencies(&config)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    runtime.block_on(commands::dispatch(cli.command, deps))
}
