use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::task::Task;

/// Calendar days of blank lead-in before the earliest task: the Monday
/// of its week, then one more full week.
const LEAD_IN_DAYS: i64 = 7;
/// Calendar days of padding after the latest task.
const TRAIL_DAYS: i64 = 14;
/// Window size when the project has no tasks yet.
const EMPTY_WINDOW_DAYS: i64 = 30;

/// The visible date window spanning all tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimelineRange {
    /// Compute the window covering every task, with padding.
    ///
    /// `start` is the earliest task start aligned back to its Monday and
    /// then pushed one further week out; `end` is the latest task end
    /// plus two weeks. An empty list yields a 30-day window from
    /// `today`.
    pub fn covering(tasks: &[Task], today: NaiveDate) -> Self {
        let Some(first) = tasks.first() else {
            return Self {
                start: today,
                end: today + Duration::days(EMPTY_WINDOW_DAYS),
            };
        };

        let mut min_start = first.start;
        let mut max_end = first.end;
        for task in tasks {
            min_start = min_start.min(task.start);
            max_end = max_end.max(task.end);
        }

        let to_monday = min_start.weekday().num_days_from_monday() as i64;
        Self {
            start: min_start - Duration::days(to_monday + LEAD_IN_DAYS),
            end: max_end + Duration::days(TRAIL_DAYS),
        }
    }

    /// Total calendar days in the window, inclusive of both ends.
    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Maps dates to horizontal pixels for the chart and the drag engine.
#[derive(Debug, Clone)]
pub struct TimelineViewport {
    /// The leftmost visible date.
    pub start: NaiveDate,
    /// The rightmost visible date.
    pub end: NaiveDate,
    /// Pixels per calendar day (controls zoom level).
    pub pixels_per_day: f32,
}

impl TimelineViewport {
    pub fn new(range: TimelineRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
            pixels_per_day: 18.0,
        }
    }

    /// Convert a date to an x-pixel offset from the viewport start.
    pub fn date_to_x(&self, date: NaiveDate) -> f32 {
        let days = (date - self.start).num_days() as f32;
        days * self.pixels_per_day
    }

    /// Convert an x-pixel offset back to a date.
    pub fn x_to_date(&self, x: f32) -> NaiveDate {
        let days = (x / self.pixels_per_day).round() as i64;
        self.start + Duration::days(days)
    }

    /// Total width in pixels for the visible range.
    pub fn total_width(&self) -> f32 {
        self.date_to_x(self.end)
    }

    /// Zoom in (increase pixels per day).
    pub fn zoom_in(&mut self) {
        self.pixels_per_day = (self.pixels_per_day * 1.2).min(80.0);
    }

    /// Zoom out (decrease pixels per day).
    pub fn zoom_out(&mut self) {
        self.pixels_per_day = (self.pixels_per_day / 1.2).max(2.0);
    }

    /// Scroll the viewport by a number of days.
    pub fn scroll_days(&mut self, days: i64) {
        self.start += Duration::days(days);
        self.end += Duration::days(days);
    }
}
