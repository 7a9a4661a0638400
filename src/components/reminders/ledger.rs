use super::threshold::ReminderThreshold;
use std::collections::HashSet;

/// Records which (event, threshold) pairs have already produced a reminder.
///
/// Entries accumulate for the lifetime of the process and are never
/// persisted, so the at-most-once guarantee holds per process
/// incarnation. The hosting environment restarts the bot periodically,
/// which resets the ledger.
#[derive(Debug, Default)]
pub struct ReminderLedger {
    fired: HashSet<(String, ReminderThreshold)>,
}

impl ReminderLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a reminder has already been produced for this pair
    pub fn has_fired(&self, event_id: &str, threshold: ReminderThreshold) -> bool {
        self.fired.contains(&(event_id.to_string(), threshold))
    }

    /// Record that a reminder was produced for this pair
    pub fn mark_fired(&mut self, event_id: &str, threshold: ReminderThreshold) {
        self.fired.insert((event_id.to_string(), threshold));
    }

    /// Number of recorded pairs
    pub fn len(&self) -> usize {
        self.fired.len()
    }

    /// Whether no reminders have been recorded yet
    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_lookup() {
        let mut ledger = ReminderLedger::new();
        assert!(!ledger.has_fired("a", ReminderThreshold::OneDay));

        ledger.mark_fired("a", ReminderThreshold::OneDay);
        assert!(ledger.has_fired("a", ReminderThreshold::OneDay));

        // Thresholds are tracked independently per event
        assert!(!ledger.has_fired("a", ReminderThreshold::OneWeek));
        assert!(!ledger.has_fired("b", ReminderThreshold::OneDay));
    }

    #[test]
    fn test_mark_is_idempotent() {
        let mut ledger = ReminderLedger::new();
        ledger.mark_fired("a", ReminderThreshold::OneWeek);
        ledger.mark_fired("a", ReminderThreshold::OneWeek);

        assert_eq!(ledger.len(), 1);
        assert!(ledger.has_fired("a", ReminderThreshold::OneWeek));
    }

    #[test]
    fn test_starts_empty() {
        let ledger = ReminderLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
    }
}
