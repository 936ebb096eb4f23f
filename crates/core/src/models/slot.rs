use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{format_local_datetime, parse_local_datetime};

/// Availability of a candidate appointment start-time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Occupied,
    Closed,
}

/// A candidate appointment start-time as shown in the booking UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Local start time, `HH:mm`
    pub time: String,
    /// Local start date-time, `yyyy-MM-dd'T'HH:mm:ss`, forwarded verbatim on booking
    pub datetime: String,
    pub status: SlotStatus,
}

impl TimeSlot {
    pub fn new(start: NaiveDateTime, status: SlotStatus) -> Self {
        Self {
            time: start.format("%H:%M").to_string(),
            datetime: format_local_datetime(start),
            status,
        }
    }

    pub fn start(&self) -> Option<NaiveDateTime> {
        parse_local_datetime(&self.datetime)
    }

    pub fn is_available(&self) -> bool {
        self.status == SlotStatus::Available
    }
}
