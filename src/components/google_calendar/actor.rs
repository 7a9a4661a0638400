use super::models::CalendarEvent;
use super::token::TokenManager;
use crate::config::Config;
use crate::error::{google_calendar_error, BotResult};
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::info;
use url::Url;

/// The Google Calendar actor that processes messages
pub struct GoogleCalendarActor {
    config: Arc<RwLock<Config>>,
    token_manager: TokenManager,
    client: Client,
    command_rx: mpsc::Receiver<GoogleCalendarCommand>,
}

/// Commands that can be sent to the Google Calendar actor
pub enum GoogleCalendarCommand {
    FetchEvents {
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
        respond_to: mpsc::Sender<BotResult<Vec<CalendarEvent>>>,
    },
    Shutdown,
}

/// Handle for communicating with the Google Calendar actor
#[derive(Clone)]
pub struct GoogleCalendarActorHandle {
    command_tx: mpsc::Sender<GoogleCalendarCommand>,
}

impl GoogleCalendarActorHandle {
    /// Fetch events starting within the given window
    pub async fn fetch_events(
        &self,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> BotResult<Vec<CalendarEvent>> {
        let (respond_to, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(GoogleCalendarCommand::FetchEvents {
                window_start,
                window_end,
                respond_to,
            })
            .await
            .map_err(|e| google_calendar_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| google_calendar_error("Response channel closed"))?
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> BotResult<()> {
        let _ = self.command_tx.send(GoogleCalendarCommand::Shutdown).await;
        Ok(())
    }
}

impl GoogleCalendarActor {
    /// Create a new actor and return its handle
    pub fn new(config: Arc<RwLock<Config>>) -> (Self, GoogleCalendarActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);

        let actor = Self {
            config: Arc::clone(&config),
            token_manager: TokenManager::new(config),
            client: Client::new(),
            command_rx,
        };

        let handle = GoogleCalendarActorHandle { command_tx };

        (actor, handle)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Google Calendar actor started");

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                GoogleCalendarCommand::FetchEvents {
                    window_start,
                    window_end,
                    respond_to,
                } => {
                    let result = Self::fetch_events(
                        Arc::clone(&self.config),
                        self.token_manager.clone(),
                        self.client.clone(),
                        window_start,
                        window_end,
                    )
                    .await;

                    let _ = respond_to.send(result).await;
                }
                GoogleCalendarCommand::Shutdown => {
                    info!("Google Calendar actor shutting down");
                    break;
                }
            }
        }

        info!("Google Calendar actor shut down");
    }

    /// Fetch events from the calendar within the given window
    async fn fetch_events(
        config: Arc<RwLock<Config>>,
        token_manager: TokenManager,
        client: Client,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> BotResult<Vec<CalendarEvent>> {
        // Get calendar ID from config
        let calendar_id = {
            let config_read = config.read().await;
            config_read.google_calendar_id.clone()
        };

        // Get authentication token
        let access_token = token_manager.access_token().await?;

        // Build URL with query parameters. singleEvents expands
        // recurring events so every instance carries its own id.
        let url_str = format!(
            "https://www.googleapis.com/calendar/v3/calendars/{}/events",
            calendar_id
        );

        let mut url = Url::parse(&url_str)
            .map_err(|e| google_calendar_error(&format!("Failed to parse URL: {}", e)))?;

        let mut query_params = HashMap::new();
        query_params.insert("timeMin", window_start.to_rfc3339());
        query_params.insert("timeMax", window_end.to_rfc3339());
        query_params.insert("singleEvents", "true".to_string());
        query_params.insert("orderBy", "startTime".to_string());

        for (key, value) in query_params {
            url.query_pairs_mut().append_pair(key, &value);
        }

        // Make API request
        let response = client
            .get(url)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to fetch events: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(google_calendar_error(&format!(
                "Failed to fetch events: HTTP {} - {}",
                status, error_body
            )));
        }

        let response_data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to parse events response: {}", e)))?;

        // Parse events from response
        let events = response_data
            .get("items")
            .and_then(|i| i.as_array())
            .ok_or_else(|| google_calendar_error("No items in response"))?;

        // Convert to CalendarEvent objects
        let calendar_events = events
            .iter()
            .map(|event| {
                let id = event
                    .get("id")
                    .and_then(|id| id.as_str())
                    .unwrap_or("")
                    .to_string();
                let summary = event
                    .get("summary")
                    .and_then(|s| s.as_str())
                    .map(|s| s.to_string());
                let description = event
                    .get("description")
                    .and_then(|s| s.as_str())
                    .map(|s| s.to_string());
                let html_link = event
                    .get("htmlLink")
                    .and_then(|s| s.as_str())
                    .map(|s| s.to_string());
                let created = event
                    .get("created")
                    .and_then(|s| s.as_str())
                    .map(|s| s.to_string());

                let start_date_time = event
                    .get("start")
                    .and_then(|start| start.as_object())
                    .and_then(|start| start.get("dateTime"))
                    .and_then(|dt| dt.as_str())
                    .map(|s| s.to_string());

                let start_date = event
                    .get("start")
                    .and_then(|start| start.as_object())
                    .and_then(|start| start.get("date"))
                    .and_then(|d| d.as_str())
                    .map(|s| s.to_string());

                let end_date_time = event
                    .get("end")
                    .and_then(|end| end.as_object())
                    .and_then(|end| end.get("dateTime"))
                    .and_then(|dt| dt.as_str())
                    .map(|s| s.to_string());

                let end_date = event
                    .get("end")
                    .and_then(|end| end.as_object())
                    .and_then(|end| end.get("date"))
                    .and_then(|d| d.as_str())
                    .map(|s| s.to_string());

                CalendarEvent {
                    id,
                    summary,
                    description,
                    html_link,
                    created,
                    start_date_time,
                    start_date,
                    end_date_time,
                    end_date,
                }
            })
            .collect();

        Ok(calendar_events)
    }
}
