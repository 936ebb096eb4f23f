use axum::{Json, extract::State, http::HeaderMap};
use booking_core::{
    errors::BookingError,
    models::{
        parse_local_datetime,
        reservation::{Reservation, ReservationRequest},
    },
};
use std::sync::Arc;
use tracing::info;

use crate::{
    ApiState,
    middleware::{auth::require_bearer_token, error_handling::AppError},
};

/// Forwards a reservation to the booking service on behalf of the caller
///
/// # Endpoint
///
/// ```text
/// POST /api/reservations
/// Authorization: Bearer <user token>
/// ```
///
/// The `datetime` field must be a naive local date-time as emitted by the slot
/// endpoint; it is forwarded exactly as received.
///
/// # Errors
///
/// * `BookingError::Authentication` - Missing bearer token
/// * `BookingError::Validation` - Malformed datetime or non-positive duration
/// * `BookingError::Upstream` - The booking service rejected the reservation
#[axum::debug_handler]
pub async fn create_reservation(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<ReservationRequest>,
) -> Result<Json<Reservation>, AppError> {
    let token = require_bearer_token(&headers)?;

    if parse_local_datetime(&payload.datetime).is_none() {
        return Err(AppError(BookingError::Validation(format!(
            "datetime must be a local date-time (yyyy-MM-ddTHH:mm:ss), got {}",
            payload.datetime
        ))));
    }
    if payload.duration_minutes <= 0 {
        return Err(AppError(BookingError::Validation(
            "durationMinutes must be positive".to_string(),
        )));
    }

    let reservation = state
        .backend
        .create_reservation(payload, Some(token))
        .await?;
    info!(
        "Reservation created: id={}, business_id={}, datetime={}",
        reservation.id, reservation.business_id, reservation.datetime
    );

    Ok(Json(reservation))
}
