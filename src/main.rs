use anyhow::{Context, Result};
use dotenvy::dotenv;
use filmfetcher::config::Config;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// The terminal belongs to the UI, so logs go to a file.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .compact()
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv_result = dotenv();
    let config = Config::from_env()?;
    init_tracing(&config.log_file)?;
    match dotenv_result {
        Ok(path) => info!("Loaded environment from {:?}", path),
        Err(e) => warn!("No .env file loaded ({}) - relying on environment", e),
    }
    info!(base_url = %config.base_url, "Starting FilmFetcher");
    filmfetcher::tui::run(config).await
}
