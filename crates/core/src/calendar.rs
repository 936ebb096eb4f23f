use chrono::{Datelike, NaiveDate};

use crate::{
    hours::{WorkingWindow, effective_window},
    models::{
        business::WorkingHours,
        calendar::{CalendarDay, DayState},
    },
};

/// Lays out every day of `month` for the date picker.
///
/// Days before `today` are past, days without a working window are closed,
/// the rest are open and carry their window. Businesses without published
/// hours are open every day with `fallback`. An invalid year or month yields
/// an empty grid.
pub fn month_grid(
    year: i32,
    month: u32,
    hours: &[WorkingHours],
    fallback: WorkingWindow,
    today: NaiveDate,
) -> Vec<CalendarDay> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|date| date.month() == month)
        .map(|date| {
            if date < today {
                return CalendarDay { date, state: DayState::Past, window: None };
            }
            match effective_window(hours, date, fallback) {
                Some(window) => CalendarDay { date, state: DayState::Open, window: Some(window) },
                None => CalendarDay { date, state: DayState::Closed, window: None },
            }
        })
        .collect()
}
