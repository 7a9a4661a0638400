mod cycle;
mod evaluator;
mod ledger;
mod notification;
mod scheduler;
mod threshold;
mod time;

pub use cycle::{run_cycle, CycleReport, LOOKAHEAD_DAYS};
pub use evaluator::evaluate_events;
pub use ledger::ReminderLedger;
pub use notification::{sanitize_description, ReminderNotification};
pub use scheduler::{run_forever, run_single_cycle};
pub use threshold::ReminderThreshold;
pub use time::{event_start_date, ReminderWindows};
