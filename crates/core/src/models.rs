pub mod business;
pub mod busy_block;
pub mod calendar;
pub mod reservation;
pub mod slot;

use chrono::NaiveDateTime;

/// Wire format of every local date-time exchanged with the booking service.
///
/// The service speaks naive wall-clock values (`yyyy-MM-dd'T'HH:mm:ss`) with
/// no offset, and so does everything in this crate.
pub const LOCAL_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Formats a local date-time in the booking service wire format.
pub fn format_local_datetime(value: NaiveDateTime) -> String {
    value.format(LOCAL_DATETIME_FORMAT).to_string()
}

/// Parses a local date-time sent by the booking service or the UI.
///
/// Fractional seconds are accepted and kept; a trailing offset is rejected.
pub fn parse_local_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, LOCAL_DATETIME_FORMAT)
        .or_else(|_| value.parse::<NaiveDateTime>())
        .ok()
}

/// Serde adapter for [`LOCAL_DATETIME_FORMAT`] fields.
pub mod local_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_local_datetime(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_local_datetime(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid local date-time: {}", raw)))
    }
}
