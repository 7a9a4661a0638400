use super::cycle::{run_cycle, CycleReport};
use super::ledger::ReminderLedger;
use crate::components::{CalendarSource, Clock, NotificationSink};
use crate::error::BotResult;
use chrono_tz::Tz;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info};

/// Run poll cycles forever on a fixed cadence.
///
/// Each cycle is awaited before the next sleep starts, so cycles never
/// overlap and the ledger is only touched from one pass at a time. A
/// failed cycle is logged at the boundary and the loop carries on.
pub async fn run_forever(
    source: &dyn CalendarSource,
    sink: &dyn NotificationSink,
    clock: &dyn Clock,
    tz: Tz,
    poll_interval: Duration,
    ledger: &mut ReminderLedger,
) {
    loop {
        match run_cycle(source, sink, clock, tz, ledger).await {
            Ok(report) => info!(
                "Poll cycle done: {} events fetched, {} reminders sent",
                report.fetched, report.sent
            ),
            Err(e) => error!("Poll cycle failed: {}", e),
        }

        sleep(poll_interval).await;
    }
}

/// Run exactly one poll cycle, propagating any failure to the caller
pub async fn run_single_cycle(
    source: &dyn CalendarSource,
    sink: &dyn NotificationSink,
    clock: &dyn Clock,
    tz: Tz,
    ledger: &mut ReminderLedger,
) -> BotResult<CycleReport> {
    run_cycle(source, sink, clock, tz, ledger).await
}
