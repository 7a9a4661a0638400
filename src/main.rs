mod components;
mod config;
mod error;
mod health;
mod shutdown;
mod startup;

use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting Muistubotti");

    // Load configuration
    let config = startup::load_config().await?;

    // Run in the configured mode
    startup::run(config).await
}
