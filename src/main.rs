#![forbid(unsafe_code)]

mod color;
mod config;
mod constants;
mod gui;
mod preview;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use config::LaunchConfig;
use preview::ImageCatalog;

/// Live banner designer: a hero banner preview with a tabbed control panel
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON launch file with optional "banner" and "images" sections
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start without an animation speed (hides the speed control)
    #[arg(long)]
    without_animation_speed: bool,

    /// Print the effective launch configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    let mut launch = match &cli.config {
        Some(path) => LaunchConfig::load(path)?,
        None => LaunchConfig::default(),
    };
    if cli.without_animation_speed {
        launch.banner.animation_speed = None;
    }

    if cli.print_config {
        println!("{}", launch.to_json_pretty()?);
        return Ok(());
    }

    let catalog = ImageCatalog::new(launch.images)?;
    info!(title = %launch.banner.title, images = catalog.len(), "Starting banner studio");

    gui::run_gui(launch.banner, catalog)
}
