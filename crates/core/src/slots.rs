//! # Slot Generation
//!
//! Enumerates the candidate appointment start-times of one day and classifies
//! each one against the busy blocks reported by the booking service.
//!
//! ## Algorithm
//!
//! 1. Start at the beginning of the working window on the requested date
//! 2. Every [`SLOT_INCREMENT_MINUTES`], consider a slot of the service's
//!    duration starting there
//! 3. Drop slots that would end after the window closes (ending exactly at
//!    closing time is fine)
//! 4. Mark a slot with the kind of the first busy block it overlaps, in list
//!    order, and mark it closed if it starts before `now`
//!
//! The increment does not depend on the service duration, so a 60 minute
//! service is offered at 09:00 and at 09:10 alike.
//!
//! All values are naive local date-times; no timezone conversion happens here.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::{
    hours::WorkingWindow,
    models::{
        busy_block::BusyBlock,
        slot::{SlotStatus, TimeSlot},
    },
};

/// Step between successive candidate start-times
pub const SLOT_INCREMENT_MINUTES: i64 = 10;

/// Generates the slots of `date` inside `window`.
///
/// # Arguments
///
/// * `date` - Calendar day to generate slots for
/// * `duration_minutes` - Length of the booked service
/// * `busy_blocks` - Busy intervals reported for that day
/// * `window` - Working window of the business
/// * `now` - Local wall-clock time used to close past slots
///
/// # Returns
///
/// Slots ordered from earliest to latest. A non-positive duration yields no
/// slots.
pub fn generate_slots(
    date: NaiveDate,
    duration_minutes: i64,
    busy_blocks: &[BusyBlock],
    window: &WorkingWindow,
    now: NaiveDateTime,
) -> Vec<TimeSlot> {
    if duration_minutes <= 0 {
        return Vec::new();
    }
    let Some(duration) = Duration::try_minutes(duration_minutes) else {
        return Vec::new();
    };
    let step = Duration::minutes(SLOT_INCREMENT_MINUTES);
    let Some((day_start, day_end)) = window.bounds_on(date) else {
        return Vec::new();
    };

    let mut slots = Vec::new();
    let mut current = day_start;
    while current < day_end {
        // Past the end of the calendar: nothing further can fit either
        let Some(slot_end) = current.checked_add_signed(duration) else {
            break;
        };

        if slot_end <= day_end {
            let status = classify(current, slot_end, busy_blocks, now);
            slots.push(TimeSlot::new(current, status));
        }

        let Some(next) = current.checked_add_signed(step) else {
            break;
        };
        current = next;
    }

    slots
}

/// Same as [`generate_slots`] with the working window given as `HH:mm` strings.
///
/// Missing bounds fall back to 09:00 and 18:00; malformed bounds yield no
/// slots.
pub fn generate_slots_for_hours(
    date: NaiveDate,
    duration_minutes: i64,
    busy_blocks: &[BusyBlock],
    work_start: Option<&str>,
    work_end: Option<&str>,
    now: NaiveDateTime,
) -> Vec<TimeSlot> {
    match WorkingWindow::parse_or_default(work_start, work_end) {
        Some(window) => generate_slots(date, duration_minutes, busy_blocks, &window, now),
        None => Vec::new(),
    }
}

/// Half-open overlap test between `[start, end)` and a busy block
pub fn overlaps(start: NaiveDateTime, end: NaiveDateTime, block: &BusyBlock) -> bool {
    start < block.end && end > block.start
}

/// Status of a slot spanning `[start, end)`.
///
/// The first overlapping block in list order decides between occupied and
/// closed. A slot starting before `now` is closed regardless.
pub fn classify(
    start: NaiveDateTime,
    end: NaiveDateTime,
    busy_blocks: &[BusyBlock],
    now: NaiveDateTime,
) -> SlotStatus {
    if start < now {
        return SlotStatus::Closed;
    }

    busy_blocks
        .iter()
        .find(|block| overlaps(start, end, block))
        .map_or(SlotStatus::Available, |block| block.kind.slot_status())
}
