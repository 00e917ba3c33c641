//! Binary entrypoint for the event dashboard.
//!
//! Delegates all logic to the library crate; no local modules here.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use event_dashboard::config::Configuration;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Parser)]
#[command(
    name = "event-dashboard",
    version,
    about = "Pick event photos, add a news note, and submit them"
)]
struct Cli {
    /// Path to an optional YAML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) {
    // RUST_LOG wins; otherwise map -v to our own level and keep the GUI stack quiet
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "event_dashboard={level},eframe=warn,egui=warn,winit=warn,wgpu=warn"
        ))
    });
    fmt().with_env_filter(filter).with_target(true).compact().init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = match &cli.config {
        Some(path) => Configuration::from_yaml_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Configuration::default(),
    }
    .validated()
    .context("invalid configuration values")?;
    info!(
        source = %cli.config.as_deref().map_or("defaults".into(), |p| p.display().to_string()),
        "configuration loaded"
    );

    event_dashboard::ui::run(cfg)
}
