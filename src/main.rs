//! LibraNet - library circulation desk
//!
//! Interactive front desk over the lending engine.

use std::io;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use libranet::{cli, clock::SystemClock, config::AppConfig, AppState};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("libranet={}", config.logging.level).into());

    let fmt_layer = if config.logging.format == "json" {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(io::stderr).boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Starting LibraNet desk v{}", env!("CARGO_PKG_VERSION"));

    let mut state = AppState::new(config, Arc::new(SystemClock))
        .context("Failed to seed the catalog")?;

    tracing::info!("Catalog ready with {} items", state.repository.items.len());

    let stdin = io::stdin();
    cli::run(&mut state, stdin.lock(), io::stdout().lock())?;

    tracing::info!("Desk closed with {} fines recorded", state.list_fines().len());
    Ok(())
}
