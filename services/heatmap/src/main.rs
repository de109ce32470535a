//! Monthly global land-surface temperature heat map generator.
//!
//! Fetches the temperature dataset once and renders it as:
//! - An interactive HTML page with hover tooltips
//! - A standalone SVG
//! - A PNG raster

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use heatmap::{exit_code, run, Args, HeatmapConfig};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    if let Err(e) = init_tracing(&args.log_level, args.log_json) {
        eprintln!("{:#}", e);
        return ExitCode::FAILURE;
    }

    let config = HeatmapConfig::from(args);

    info!(
        source = %config.source,
        output = %config.output.display(),
        format = config.format.as_str(),
        "Starting heat map generator"
    );

    match run(&config).await {
        Ok(summary) => {
            info!(
                records = summary.records,
                bytes = summary.bytes_written,
                "Done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            let message = format!("{:#}", e);
            error!(error = %message, "Heat map generation failed");
            ExitCode::from(exit_code(&e) as u8)
        }
    }
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true);

    let installed = if json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    installed.context("Failed to install tracing subscriber")
}
