use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod models;
mod services;
mod utils;

const DEFAULT_LOG_FILTER: &str = "latency_histogram=info";

fn main() -> ExitCode {
    dotenv::dotenv().ok();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = commands::Cli::parse();

    info!("📊 latency-histogram v{} starting", env!("CARGO_PKG_VERSION"));

    match commands::histogram::execute(&cli) {
        Ok(written) => {
            info!("✅ Done, {} histograms written", written.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("❌ {}", utils::error_chain(&e));
            ExitCode::FAILURE
        }
    }
}
