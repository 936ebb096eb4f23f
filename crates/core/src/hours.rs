//! # Working Hours
//!
//! A [`WorkingWindow`] is the wall-clock span of a day during which a business
//! takes appointments. Windows are parsed from the `HH:mm` strings used by the
//! booking service and the UI, and resolved against a business's weekly
//! opening hours when those are known.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::models::business::{DayOfWeek, WorkingHours};

pub const DEFAULT_WORK_START: &str = "09:00";
pub const DEFAULT_WORK_END: &str = "18:00";

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Local wall-clock span of a working day, in minutes since midnight.
///
/// `end` may be `24:00`, which bounds the day at the following midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkingWindow {
    start: u32,
    end: u32,
}

impl Default for WorkingWindow {
    /// 09:00 to 18:00
    fn default() -> Self {
        Self {
            start: 9 * 60,
            end: 18 * 60,
        }
    }
}

impl WorkingWindow {
    /// Parses a window from `HH:mm` strings.
    ///
    /// Returns `None` if either bound is malformed. A window whose end is not
    /// after its start is accepted and simply contains no slots.
    pub fn parse(start: &str, end: &str) -> Option<Self> {
        let start = parse_hhmm(start).filter(|minutes| *minutes < MINUTES_PER_DAY)?;
        let end = parse_hhmm(end)?;
        Some(Self { start, end })
    }

    /// Parses a window, substituting the defaults for missing bounds.
    pub fn parse_or_default(start: Option<&str>, end: Option<&str>) -> Option<Self> {
        Self::parse(
            start.unwrap_or(DEFAULT_WORK_START),
            end.unwrap_or(DEFAULT_WORK_END),
        )
    }

    /// Naive start and end date-times of the window on `date`.
    ///
    /// `None` if the window runs past the last representable date.
    pub fn bounds_on(&self, date: NaiveDate) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let midnight = date.and_time(NaiveTime::MIN);
        let start = midnight.checked_add_signed(Duration::minutes(i64::from(self.start)))?;
        let end = midnight.checked_add_signed(Duration::minutes(i64::from(self.end)))?;
        Some((start, end))
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl Serialize for WorkingWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("WorkingWindow", 2)?;
        state.serialize_field("start", &format_hhmm(self.start))?;
        state.serialize_field("end", &format_hhmm(self.end))?;
        state.end()
    }
}

/// Minutes since midnight for an `HH:mm` string; `24:00` maps to 1440.
pub fn parse_hhmm(value: &str) -> Option<u32> {
    let value = value.trim();
    if value == "24:00" {
        return Some(MINUTES_PER_DAY);
    }
    NaiveTime::parse_from_str(value, "%H:%M")
        .ok()
        .map(|time| time.hour() * 60 + time.minute())
}

pub fn format_hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Window of the business on `date`'s weekday.
///
/// `None` when the weekday has no entry, is marked closed, or carries
/// malformed times.
pub fn window_for_date(hours: &[WorkingHours], date: NaiveDate) -> Option<WorkingWindow> {
    let day = DayOfWeek::from(date.weekday());
    hours
        .iter()
        .find(|entry| entry.day_of_week == day)
        .filter(|entry| !entry.closed)
        .and_then(|entry| WorkingWindow::parse(&entry.open_time, &entry.close_time))
        .filter(|window| !window.is_empty())
}

/// Window used for slot generation on `date`.
///
/// Businesses that publish no opening hours at all get `fallback`; otherwise
/// the weekday entry decides, and `None` means closed that day.
pub fn effective_window(
    hours: &[WorkingHours],
    date: NaiveDate,
    fallback: WorkingWindow,
) -> Option<WorkingWindow> {
    if hours.is_empty() {
        Some(fallback)
    } else {
        window_for_date(hours, date)
    }
}
