use crate::components::discord::DiscordNotifier;
use crate::components::google_calendar::GoogleCalendarHandle;
use crate::components::reminders::{run_forever, run_single_cycle, ReminderLedger};
use crate::components::SystemClock;
use crate::config::Config;
use crate::error::Error;
use crate::health;
use crate::shutdown;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, RwLock};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,serenity=warn")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub async fn load_config() -> miette::Result<Arc<RwLock<Config>>> {
    match Config::load() {
        Ok(config) => Ok(Arc::new(RwLock::new(config))),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Build the collaborators and run the bot in the configured mode
pub async fn run(config: Arc<RwLock<Config>>) -> miette::Result<()> {
    let (timezone, poll_interval_secs, run_once, health_port, discord_token, reminder_channel_id) = {
        let config_read = config.read().await;
        (
            config_read.timezone,
            config_read.poll_interval_secs,
            config_read.run_once,
            config_read.health_port,
            config_read.discord_token.clone(),
            config_read.reminder_channel_id,
        )
    };

    // Liveness endpoint for the hosting environment
    health::start_health_server(health_port)?;

    let calendar = GoogleCalendarHandle::new(Arc::clone(&config));
    let notifier = DiscordNotifier::new(&discord_token, reminder_channel_id);
    let clock = SystemClock;

    // The dedup ledger lives for this process only; a restart resets it
    let mut ledger = ReminderLedger::new();

    if run_once {
        info!("Running a single poll cycle");
        let report =
            run_single_cycle(&calendar, &notifier, &clock, timezone, &mut ledger).await?;
        info!(
            "Poll cycle done: {} events fetched, {} reminders sent",
            report.fetched, report.sent
        );
        calendar.shutdown().await?;
        return Ok(());
    }

    // Create shutdown channel
    let (shutdown_send, shutdown_recv) = oneshot::channel();

    // Spawn signal handler task
    tokio::spawn(async move {
        shutdown::handle_signals(shutdown_send).await;
    });

    info!(
        "Starting poll loop with {} second interval",
        poll_interval_secs
    );

    tokio::select! {
        _ = run_forever(
            &calendar,
            &notifier,
            &clock,
            timezone,
            Duration::from_secs(poll_interval_secs),
            &mut ledger,
        ) => {}
        _ = shutdown_recv => {
            info!("Received shutdown signal, stopping poll loop");
        }
    }

    calendar.shutdown().await?;
    Ok(())
}
