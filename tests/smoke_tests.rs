use muistubotti::components::google_calendar::models::CalendarEvent;
use muistubotti::components::reminders::{ReminderNotification, ReminderThreshold};
use muistubotti::config::Config;
use std::sync::Arc;
use tokio::sync::RwLock;

fn test_config() -> Config {
    Config {
        discord_token: "test_token".to_string(),
        google_client_id: "test_client_id".to_string(),
        google_client_secret: "test_client_secret".to_string(),
        google_refresh_token: "test_refresh_token".to_string(),
        google_calendar_id: "test_calendar_id".to_string(),
        reminder_channel_id: 123456789,
        timezone: chrono_tz::Europe::Helsinki,
        poll_interval_secs: 300,
        run_once: false,
        health_port: 8080,
    }
}

/// Smoke test to verify that a config can be constructed and shared
#[tokio::test]
async fn test_config_shared_access() {
    let config = Arc::new(RwLock::new(test_config()));

    let calendar_id = {
        let config_guard = config.read().await;
        config_guard.google_calendar_id.clone()
    };

    assert_eq!(calendar_id, "test_calendar_id");
    assert_eq!(config.read().await.reminder_channel_id, 123456789);
    assert!(!config.read().await.run_once);
}

/// Smoke test for calendar event construction and defaults
#[test]
fn test_calendar_event_defaults() {
    let event = CalendarEvent {
        id: "event1".to_string(),
        summary: Some("Test Event 1".to_string()),
        start_date_time: Some("2023-01-01T10:00:00+02:00".to_string()),
        ..Default::default()
    };

    assert_eq!(event.id, "event1");
    assert_eq!(event.summary, Some("Test Event 1".to_string()));
    assert!(event.start_date.is_none());
    assert!(event.html_link.is_none());
}

/// Smoke test for the rendered reminder message
#[test]
fn test_reminder_message_rendering() {
    let notification = ReminderNotification {
        event_id: "event1".to_string(),
        threshold: ReminderThreshold::OneWeek,
        title: "Kuukausipalaveri".to_string(),
        start_display: "08.01.2024 klo 10:00".to_string(),
        description: None,
        link: Some("https://calendar.google.com/event?eid=event1".to_string()),
    };

    let message = notification.format_message();
    assert!(message.starts_with("⏰"));
    assert!(message.contains("viikon päästä"));
    assert!(message.contains("**Kuukausipalaveri**"));
    assert!(message.contains("📅 08.01.2024 klo 10:00"));
    assert!(message.contains("https://calendar.google.com/event?eid=event1"));
}
