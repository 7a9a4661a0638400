/// Reminder thresholds checked on every poll cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReminderThreshold {
    OneDay,
    OneWeek,
}

impl ReminderThreshold {
    /// All thresholds, in the order they are evaluated per event
    pub const ALL: [ReminderThreshold; 2] = [ReminderThreshold::OneDay, ReminderThreshold::OneWeek];

    /// Day offset from today that this threshold matches
    pub fn days(self) -> i64 {
        match self {
            ReminderThreshold::OneDay => 1,
            ReminderThreshold::OneWeek => 7,
        }
    }

    /// Display label used in the reminder header
    pub fn label(self) -> &'static str {
        match self {
            ReminderThreshold::OneDay => "huomenna",
            ReminderThreshold::OneWeek => "viikon päästä",
        }
    }
}
