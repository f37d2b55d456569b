//! Motor Quote - command line front door
//!
//! Reads a collected application document and prints the rated price
//! breakdown.
//!
//! # Usage
//!
//! ```bash
//! # Human-readable summary
//! quote application.json
//!
//! # Machine-readable output, rated as of a fixed date
//! quote application.json --as-of 2025-06-15 --json
//! ```
//!
//! # Environment Variables
//!
//! * `QUOTE_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_rating::{Application, RatingEngine};
use interface_cli::config::CliConfig;
use interface_cli::format::format_breakdown;

/// Rate a motor insurance application and print the price breakdown
#[derive(Debug, Parser)]
#[command(name = "quote", version, about)]
struct Args {
    /// Path to the application JSON document
    input: PathBuf,

    /// Rate as of this date instead of today (YYYY-MM-DD)
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Emit the breakdown as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = CliConfig::load();
    init_tracing(&config.log_level);

    let args = Args::parse();

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let application: Application =
        serde_json::from_str(&raw).context("Failed to parse application document")?;

    tracing::info!(input = %args.input.display(), "rating application");

    let engine = RatingEngine::new();
    let breakdown = match args.as_of {
        Some(as_of) => engine.quote_as_of(&application, as_of),
        None => engine.quote(&application),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        print!("{}", format_breakdown(&breakdown));
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
