use super::evaluator::evaluate_events;
use super::ledger::ReminderLedger;
use super::time::ReminderWindows;
use crate::components::{CalendarSource, Clock, NotificationSink};
use crate::error::BotResult;
use chrono::Duration;
use chrono_tz::Tz;
use tracing::info;

/// Fetch look-ahead in days. Must stay above 8 so events are observed
/// before both the one-week and one-day windows have passed.
pub const LOOKAHEAD_DAYS: i64 = 9;

/// Counters from one poll cycle, for the cycle log line
#[derive(Debug, Default, Clone, Copy)]
pub struct CycleReport {
    pub fetched: usize,
    pub sent: usize,
}

/// Run one fetch-evaluate-deliver pass.
///
/// Notifications are delivered one at a time in event order, each send
/// fully awaited. Errors from the fetch or from an individual delivery
/// propagate to the caller, which logs them and waits for the next
/// tick. A fetch error leaves the ledger untouched, so the cycle is
/// safe to retry. A delivery error arrives after the ledger was marked,
/// so the affected pair is not retried on later cycles.
pub async fn run_cycle(
    source: &dyn CalendarSource,
    sink: &dyn NotificationSink,
    clock: &dyn Clock,
    tz: Tz,
    ledger: &mut ReminderLedger,
) -> BotResult<CycleReport> {
    let now = clock.now();
    let events = source
        .fetch_events(now, now + Duration::days(LOOKAHEAD_DAYS))
        .await?;

    let mut report = CycleReport {
        fetched: events.len(),
        sent: 0,
    };

    let windows = ReminderWindows::new(now, tz);
    let notifications = evaluate_events(&events, &windows, ledger, tz);

    for notification in &notifications {
        sink.deliver(notification).await?;
        report.sent += 1;
        info!(
            "Sent {} reminder for event {}",
            notification.threshold.label(),
            notification.event_id
        );
    }

    Ok(report)
}
