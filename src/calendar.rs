use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the date parsing boundary.
///
/// The scheduling core itself never produces errors; this only covers
/// converting the `YYYY-MM-DD` wire form into a [`NaiveDate`].
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("invalid date string '{input}': {source}")]
    InvalidDate {
        input: String,
        source: chrono::ParseError,
    },
}

/// Parse a `YYYY-MM-DD` string into a UTC calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|source| CalendarError::InvalidDate {
        input: s.to_string(),
        source,
    })
}

/// Format a date back to the `YYYY-MM-DD` wire form.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The set of weekdays that count as working days.
///
/// All date arithmetic in the crate goes through a calendar so that the
/// working week is configurable; the default is Monday through Friday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessCalendar {
    /// Indexed by `Weekday::num_days_from_monday()` (Mon = 0 .. Sun = 6).
    working: [bool; 7],
}

impl Default for BusinessCalendar {
    fn default() -> Self {
        Self {
            working: [true, true, true, true, true, false, false],
        }
    }
}

impl BusinessCalendar {
    /// Build a calendar from an explicit set of working weekdays.
    pub fn with_working_days(days: &[Weekday]) -> Self {
        let mut working = [false; 7];
        for day in days {
            working[day.num_days_from_monday() as usize] = true;
        }
        Self { working }
    }

    /// Whether `date` falls on a working day.
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        self.working[date.weekday().num_days_from_monday() as usize]
    }

    /// Shift `date` by `n` days.
    ///
    /// Calendar mode (`business_only == false`) moves by `n` raw calendar
    /// days; `n` may be negative.
    ///
    /// Business mode treats `n` as a duration in working days, clamped to
    /// a minimum of 1. Duration 1 means the task starts and ends on the
    /// same day, so the input is returned unchanged; otherwise `n - 1`
    /// working-day steps are consumed, skipping non-working days.
    pub fn add_days(&self, date: NaiveDate, n: i64, business_only: bool) -> NaiveDate {
        if !business_only {
            return date + Duration::days(n);
        }

        let mut remaining = n.max(1);
        if remaining == 1 {
            return date;
        }
        remaining -= 1;

        let mut current = date;
        while remaining > 0 {
            current += Duration::days(1);
            if self.is_business_day(current) {
                remaining -= 1;
            }
        }
        current
    }

    /// Number of days between `start` and `end`.
    ///
    /// Calendar mode returns the raw day count `end - start`; business
    /// mode counts working days in the inclusive range `[start, end]`.
    /// Both return 0 when `end < start`.
    pub fn diff_days(&self, start: NaiveDate, end: NaiveDate, business_only: bool) -> i64 {
        if end < start {
            return 0;
        }

        if !business_only {
            return (end - start).num_days();
        }

        let mut count = 0;
        let mut current = start;
        while current <= end {
            if self.is_business_day(current) {
                count += 1;
            }
            current += Duration::days(1);
        }
        count
    }

    /// First working day at or after `date`.
    pub fn next_business_day(&self, date: NaiveDate) -> NaiveDate {
        let mut current = date;
        while !self.is_business_day(current) {
            current += Duration::days(1);
        }
        current
    }
}
