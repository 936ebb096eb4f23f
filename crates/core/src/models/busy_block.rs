use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{local_datetime, slot::SlotStatus};

/// Reason the booking service reports a business as busy.
///
/// The service only documents `OCCUPIED` and `CLOSED`; any other tag is read
/// as an existing reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum BusyKind {
    Occupied,
    Closed,
}

impl From<String> for BusyKind {
    fn from(tag: String) -> Self {
        if tag.eq_ignore_ascii_case("CLOSED") {
            BusyKind::Closed
        } else {
            BusyKind::Occupied
        }
    }
}

impl BusyKind {
    /// Status given to a slot that overlaps a block of this kind
    pub fn slot_status(self) -> SlotStatus {
        match self {
            BusyKind::Occupied => SlotStatus::Occupied,
            BusyKind::Closed => SlotStatus::Closed,
        }
    }
}

/// Interval during which a business is closed or already booked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyBlock {
    #[serde(with = "local_datetime")]
    pub start: NaiveDateTime,
    #[serde(with = "local_datetime")]
    pub end: NaiveDateTime,
    #[serde(rename = "type")]
    pub kind: BusyKind,
}
