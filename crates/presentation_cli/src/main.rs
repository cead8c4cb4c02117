//! EcoRoute CLI
//!
//! Looks up candidate routes between two coordinate pairs and prints the one
//! with the lowest reported emissions.

#![allow(clippy::print_stdout)]

mod output;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use domain::Coordinates;
use infrastructure::{AppConfig, build_eco_route_service, init_telemetry};
use tracing::warn;

/// EcoRoute CLI
#[derive(Debug, Parser)]
#[command(name = "ecoroute-cli")]
#[command(author, version, about = "Find the lowest-emissions route between two points", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Origin as "lat,lon" (default: from config, Bangalore)
    #[arg(short, long)]
    origin: Option<String>,

    /// Destination as "lat,lon" (default: from config, Delhi)
    #[arg(short, long)]
    destination: Option<String>,

    /// Configuration file (default: ./ecoroute.toml if present)
    #[arg(short, long, env = "ECOROUTE_CONFIG")]
    config: Option<PathBuf>,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Log a warning for coordinates that do not look like `"lat,lon"`
///
/// The value is still sent as given.
fn check_coordinates(label: &str, value: &str) {
    if let Err(e) = Coordinates::parse(value) {
        warn!(%label, error = %e, "Coordinates look malformed, sending as given");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let mut telemetry = config.telemetry.clone();
    if let Some(filter) = log_filter_from_verbosity(cli.verbose) {
        telemetry = telemetry.with_log_filter(filter);
    }
    init_telemetry(&telemetry)?;

    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid configuration")?;

    let origin = cli.origin.unwrap_or_else(|| config.route.origin.clone());
    let destination = cli
        .destination
        .unwrap_or_else(|| config.route.destination.clone());
    check_coordinates("origin", &origin);
    check_coordinates("destination", &destination);

    let service = build_eco_route_service(&config)?;

    println!("{}", output::header(&origin, &destination));
    let outcome = service.calculate(&origin, &destination).await;
    for line in output::outcome_lines(&outcome) {
        println!("{line}");
    }

    Ok(())
}
