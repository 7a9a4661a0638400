use super::ledger::ReminderLedger;
use super::notification::{sanitize_description, ReminderNotification};
use super::threshold::ReminderThreshold;
use super::time::{event_start_date, ReminderWindows};
use crate::components::google_calendar::models::CalendarEvent;
use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use tracing::warn;

/// Evaluate a batch of fetched events against the reminder windows.
///
/// Events are processed in input order. Events without an id or a start
/// are skipped without touching the ledger. Both thresholds are checked
/// independently per event. The ledger is marked when a notification is
/// built, before any delivery attempt, so a later delivery failure does
/// not put the pair back in play on the next cycle.
pub fn evaluate_events(
    events: &[CalendarEvent],
    windows: &ReminderWindows,
    ledger: &mut ReminderLedger,
    tz: Tz,
) -> Vec<ReminderNotification> {
    let mut notifications = Vec::new();

    for event in events {
        if event.id.is_empty() {
            continue;
        }

        let event_date = match event_start_date(event, tz) {
            Ok(Some(date)) => date,
            Ok(None) => continue,
            Err(e) => {
                warn!("Skipping event {}: {}", event.id, e);
                continue;
            }
        };

        for threshold in ReminderThreshold::ALL {
            if windows.matches(event_date, threshold) && !ledger.has_fired(&event.id, threshold) {
                notifications.push(build_notification(event, event_date, threshold, tz));
                ledger.mark_fired(&event.id, threshold);
            }
        }
    }

    notifications
}

fn build_notification(
    event: &CalendarEvent,
    event_date: NaiveDate,
    threshold: ReminderThreshold,
    tz: Tz,
) -> ReminderNotification {
    let title = event
        .summary
        .clone()
        .unwrap_or_else(|| "Unnamed event".to_string());

    let description = event
        .description
        .as_deref()
        .map(sanitize_description)
        .filter(|d| !d.is_empty());

    ReminderNotification {
        event_id: event.id.clone(),
        threshold,
        title,
        start_display: format_start(event, event_date, tz),
        description,
        link: event.html_link.clone(),
    }
}

/// Pretty-print the event start: date only for all-day events,
/// localized date and time for timed events
fn format_start(event: &CalendarEvent, event_date: NaiveDate, tz: Tz) -> String {
    if let Some(start_time) = &event.start_date_time {
        if let Ok(dt) = DateTime::parse_from_rfc3339(start_time) {
            return dt.with_timezone(&tz).format("%d.%m.%Y klo %H:%M").to_string();
        }
    }
    event_date.format("%d.%m.%Y").to_string()
}
