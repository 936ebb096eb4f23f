use serde::{Deserialize, Serialize};

/// Reservation submitted by the UI and forwarded to the booking service.
///
/// `datetime` is the string of the chosen [`TimeSlot`](super::slot::TimeSlot)
/// and is passed through unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub business_id: i64,
    pub service_id: Option<i64>,
    pub datetime: String,
    pub duration_minutes: i64,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub business_id: i64,
    pub datetime: String,
    pub status: String,
}
