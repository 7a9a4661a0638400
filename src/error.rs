use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Discord API error: {0}")]
    #[diagnostic(code(muistubotti::discord_api))]
    DiscordApi(#[from] serenity::Error),

    #[error("Environment error: {0}")]
    #[diagnostic(code(muistubotti::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(muistubotti::config))]
    Config(String),

    #[error("Google Calendar API error: {0}")]
    #[diagnostic(code(muistubotti::google_calendar))]
    GoogleCalendar(String),

    #[error("Notification delivery error: {0}")]
    #[diagnostic(code(muistubotti::delivery))]
    Delivery(String),

    #[error(transparent)]
    #[diagnostic(code(muistubotti::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(muistubotti::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(muistubotti::other))]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type BotResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
#[allow(dead_code)]
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create Google Calendar errors
pub fn google_calendar_error(message: &str) -> Error {
    Error::GoogleCalendar(message.to_string())
}

/// Helper to create notification delivery errors
#[allow(dead_code)]
pub fn delivery_error(message: &str) -> Error {
    Error::Delivery(message.to_string())
}

/// Helper to create other errors
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
