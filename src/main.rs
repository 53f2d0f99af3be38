//! forecast-card binary
//!
//! Thin CLI wrapper around the library. Parses arguments, sets up logging
//! and invokes `forecast_card::run`.

use anyhow::Result;
use clap::Parser;
use forecast_card::{Args, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::from_args(Args::parse())?;
    forecast_card::run(&settings).await
}
