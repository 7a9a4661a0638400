use super::threshold::ReminderThreshold;
use crate::components::google_calendar::models::CalendarEvent;
use crate::error::{google_calendar_error, BotResult};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

/// Calendar dates the reminder thresholds resolve to for one poll cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderWindows {
    pub today: NaiveDate,
    pub tomorrow: NaiveDate,
    pub one_week: NaiveDate,
}

impl ReminderWindows {
    /// Compute today's windows in the reminder timezone
    pub fn new(now: DateTime<Utc>, tz: Tz) -> Self {
        let today = now.with_timezone(&tz).date_naive();
        Self {
            today,
            tomorrow: today + Duration::days(ReminderThreshold::OneDay.days()),
            one_week: today + Duration::days(ReminderThreshold::OneWeek.days()),
        }
    }

    /// Whether an event date falls exactly on a threshold's target day
    pub fn matches(&self, event_date: NaiveDate, threshold: ReminderThreshold) -> bool {
        match threshold {
            ReminderThreshold::OneDay => event_date == self.tomorrow,
            ReminderThreshold::OneWeek => event_date == self.one_week,
        }
    }
}

/// Get the calendar date an event starts on, in the reminder timezone.
///
/// All-day dates are already calendar dates in the calendar's own zone;
/// they are used verbatim. Round-tripping them through a datetime can
/// shift the day depending on the offset. Timed starts are converted
/// from their instant into the reminder timezone first.
///
/// Returns `Ok(None)` when the event has neither a date nor a dateTime.
pub fn event_start_date(event: &CalendarEvent, tz: Tz) -> BotResult<Option<NaiveDate>> {
    if let Some(start_time) = &event.start_date_time {
        let dt = DateTime::parse_from_rfc3339(start_time)
            .map_err(|e| google_calendar_error(&format!("Failed to parse datetime: {}", e)))?;
        Ok(Some(dt.with_timezone(&tz).date_naive()))
    } else if let Some(start_date) = &event.start_date {
        let date = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
            .map_err(|e| google_calendar_error(&format!("Failed to parse date: {}", e)))?;
        Ok(Some(date))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::{Europe, Pacific, UTC};

    fn all_day_event(date: &str) -> CalendarEvent {
        CalendarEvent {
            id: "test".to_string(),
            start_date: Some(date.to_string()),
            ..Default::default()
        }
    }

    fn timed_event(date_time: &str) -> CalendarEvent {
        CalendarEvent {
            id: "test".to_string(),
            start_date_time: Some(date_time.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_windows_from_midnight() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let windows = ReminderWindows::new(now, UTC);

        assert_eq!(windows.today, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(
            windows.tomorrow,
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
        assert_eq!(
            windows.one_week,
            NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()
        );
    }

    #[test]
    fn test_windows_cross_month_boundary() {
        let now = Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap();
        let windows = ReminderWindows::new(now, UTC);

        assert_eq!(
            windows.tomorrow,
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        );
        assert_eq!(
            windows.one_week,
            NaiveDate::from_ymd_opt(2024, 2, 7).unwrap()
        );
    }

    #[test]
    fn test_windows_use_local_date_not_utc() {
        // 23:30 UTC on Jan 1 is already Jan 2 in Helsinki (UTC+2)
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 23, 30, 0).unwrap();
        let windows = ReminderWindows::new(now, Europe::Helsinki);

        assert_eq!(windows.today, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_matches_exact_days_only() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 6, 0, 0).unwrap();
        let windows = ReminderWindows::new(now, UTC);

        let jan = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        assert!(windows.matches(jan(2), ReminderThreshold::OneDay));
        assert!(windows.matches(jan(8), ReminderThreshold::OneWeek));
        assert!(!windows.matches(jan(3), ReminderThreshold::OneDay));
        assert!(!windows.matches(jan(3), ReminderThreshold::OneWeek));
        assert!(!windows.matches(jan(1), ReminderThreshold::OneDay));
        assert!(!windows.matches(jan(9), ReminderThreshold::OneWeek));
    }

    #[test]
    fn test_all_day_date_used_verbatim() {
        let event = all_day_event("2024-06-10");
        let expected = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        // The stored date must not shift regardless of the timezone
        for tz in [UTC, Europe::Helsinki, Pacific::Auckland] {
            assert_eq!(event_start_date(&event, tz).unwrap(), Some(expected));
        }
    }

    #[test]
    fn test_timed_event_converted_to_zone() {
        // 23:30 in New York on June 10 is 06:30 on June 11 in Helsinki
        let event = timed_event("2024-06-10T23:30:00-04:00");

        assert_eq!(
            event_start_date(&event, Europe::Helsinki).unwrap(),
            Some(NaiveDate::from_ymd_opt(2024, 6, 11).unwrap())
        );
        assert_eq!(
            event_start_date(&event, UTC).unwrap(),
            Some(NaiveDate::from_ymd_opt(2024, 6, 11).unwrap())
        );
    }

    #[test]
    fn test_timed_event_date_is_pure_function_of_instant() {
        let event = timed_event("2024-06-10T15:00:00+03:00");

        let first = event_start_date(&event, Europe::Helsinki).unwrap();
        let second = event_start_date(&event, Europe::Helsinki).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, Some(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()));
    }

    #[test]
    fn test_missing_start_returns_none() {
        let event = CalendarEvent {
            id: "test".to_string(),
            ..Default::default()
        };
        assert_eq!(event_start_date(&event, UTC).unwrap(), None);
    }

    #[test]
    fn test_unparseable_start_is_an_error() {
        assert!(event_start_date(&timed_event("not a datetime"), UTC).is_err());
        assert!(event_start_date(&all_day_event("10.06.2024"), UTC).is_err());
    }
}
