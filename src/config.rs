use crate::error::{env_error, BotResult};
use chrono_tz::Tz;
use dotenvy::dotenv;
use std::env;

/// Default timezone for reminder date arithmetic
pub const DEFAULT_TIMEZONE: &str = "Europe/Helsinki";

/// Default poll interval in seconds
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 300;

/// Default port for the health-check endpoint
pub const DEFAULT_HEALTH_PORT: u16 = 8080;

/// Main configuration structure for the bot
#[derive(Debug, Clone)]
pub struct Config {
    /// Discord bot token
    pub discord_token: String,
    /// Google Calendar API client ID
    pub google_client_id: String,
    /// Google Calendar API client secret
    pub google_client_secret: String,
    /// OAuth refresh token for the calendar account
    pub google_refresh_token: String,
    /// Google Calendar ID to monitor
    pub google_calendar_id: String,
    /// Discord channel ID to send reminders to
    pub reminder_channel_id: u64,
    /// Timezone for reminder date arithmetic
    pub timezone: Tz,
    /// Seconds between poll cycles
    pub poll_interval_secs: u64,
    /// Run a single poll cycle and exit instead of looping
    pub run_once: bool,
    /// Port for the health-check endpoint
    pub health_port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> BotResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Required environment variables
        let discord_token = env::var("DISCORD_TOKEN").map_err(|_| env_error("DISCORD_TOKEN"))?;
        let google_client_id =
            env::var("GOOGLE_CLIENT_ID").map_err(|_| env_error("GOOGLE_CLIENT_ID"))?;
        let google_client_secret =
            env::var("GOOGLE_CLIENT_SECRET").map_err(|_| env_error("GOOGLE_CLIENT_SECRET"))?;
        let google_refresh_token =
            env::var("GOOGLE_REFRESH_TOKEN").map_err(|_| env_error("GOOGLE_REFRESH_TOKEN"))?;
        let google_calendar_id =
            env::var("GOOGLE_CALENDAR_ID").map_err(|_| env_error("GOOGLE_CALENDAR_ID"))?;

        // Parse numeric values
        let reminder_channel_id = env::var("REMINDER_CHANNEL_ID")
            .map_err(|_| env_error("REMINDER_CHANNEL_ID"))?
            .parse::<u64>()
            .map_err(|_| env_error("Invalid REMINDER_CHANNEL_ID format"))?;

        let timezone = env::var("TIMEZONE")
            .unwrap_or_else(|_| String::from(DEFAULT_TIMEZONE))
            .parse::<Tz>()
            .map_err(|_| env_error("Invalid TIMEZONE identifier"))?;

        let poll_interval_secs = match env::var("POLL_INTERVAL_SECS") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|_| env_error("Invalid POLL_INTERVAL_SECS format"))?,
            Err(_) => DEFAULT_POLL_INTERVAL_SECS,
        };

        let health_port = match env::var("HEALTH_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| env_error("Invalid HEALTH_PORT format"))?,
            Err(_) => DEFAULT_HEALTH_PORT,
        };

        // Exit-mode flag: run a single cycle instead of the poll loop
        let run_once = env::var("RUN_ONCE")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Config {
            discord_token,
            google_client_id,
            google_client_secret,
            google_refresh_token,
            google_calendar_id,
            reminder_channel_id,
            timezone,
            poll_interval_secs,
            run_once,
            health_port,
        })
    }
}
