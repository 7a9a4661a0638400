use crate::error::BotResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

// Export components
pub mod discord;
pub mod google_calendar;
pub mod reminders;

// Re-export Google Calendar handle
pub use google_calendar::GoogleCalendarHandle;

use google_calendar::models::CalendarEvent;
use reminders::ReminderNotification;

/// Source of calendar events for the poll loop
#[async_trait]
pub trait CalendarSource: Send + Sync {
    /// Fetch events starting within the given window, ordered by start time
    async fn fetch_events(
        &self,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> BotResult<Vec<CalendarEvent>>;
}

/// Channel that reminder notifications are delivered to
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Deliver one notification, fully awaited before the next
    async fn deliver(&self, notification: &ReminderNotification) -> BotResult<()>;
}

/// Clock abstraction so the reminder logic can be tested without wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
