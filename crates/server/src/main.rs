//! Entry point for the SkinAI analysis proxy.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use server::{start_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting SkinAI analysis proxy");

    let config = Config::load()?;
    start_server(config).await
}
