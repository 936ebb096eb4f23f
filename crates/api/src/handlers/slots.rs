//! # Slot Handlers
//!
//! Serves the appointment slots shown by the booking form.
//!
//! ## Working Window Resolution
//!
//! 1. `workStart`/`workEnd` query parameters, when either is given (a missing
//!    bound falls back to 09:00 or 18:00); the business must still exist
//! 2. The business's opening hours for the requested weekday
//! 3. The configured default window, for businesses without published hours
//!    or when the business lookup fails
//!
//! A day on which the business is closed has no slots. If the schedule query
//! fails the slots are still served, computed as if the day were free.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use booking_client::loader::SlotRequest;
use booking_core::{
    errors::BookingError,
    hours::{WorkingWindow, effective_window},
    models::slot::TimeSlot,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{ApiState, middleware::error_handling::AppError};

/// Query parameters of the slot endpoint
///
/// ```text
/// GET /api/businesses/7/slots?date=2024-01-15&duration=30&workStart=10:00&workEnd=19:00
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotQuery {
    /// Calendar day, `yyyy-MM-dd`
    pub date: NaiveDate,

    /// Service length in minutes
    pub duration: i64,

    /// Explicit opening time, `HH:mm`
    pub work_start: Option<String>,

    /// Explicit closing time, `HH:mm`
    pub work_end: Option<String>,
}

#[axum::debug_handler]
pub async fn business_slots(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<Vec<TimeSlot>>, AppError> {
    if query.duration <= 0 {
        return Err(AppError(BookingError::Validation(
            "duration must be a positive number of minutes".to_string(),
        )));
    }

    let Some(window) = resolve_window(&state, id, &query).await? else {
        debug!("Business closed: id={}, date={}", id, query.date);
        return Ok(Json(Vec::new()));
    };

    let request = SlotRequest {
        business_id: id,
        date: query.date,
        duration_minutes: query.duration,
        window,
    };
    let slots = state.loader.load(&request, state.clock.now()).await;

    Ok(Json(slots))
}

async fn resolve_window(
    state: &ApiState,
    id: i64,
    query: &SlotQuery,
) -> Result<Option<WorkingWindow>, AppError> {
    let explicit = if query.work_start.is_some() || query.work_end.is_some() {
        let window =
            WorkingWindow::parse_or_default(query.work_start.as_deref(), query.work_end.as_deref())
                .ok_or_else(|| {
                    BookingError::Validation("workStart and workEnd must be HH:mm times".to_string())
                })?;
        Some(window)
    } else {
        None
    };

    match state.backend.get_business(id).await {
        Ok(Some(business)) => Ok(explicit.or_else(|| {
            effective_window(&business.working_hours, query.date, state.default_window)
        })),
        Ok(None) => Err(AppError(BookingError::NotFound(format!(
            "Business with ID {} not found",
            id
        )))),
        Err(e) => {
            warn!(
                "Business lookup failed, using fallback hours: id={}, error={:#}",
                id, e
            );
            Ok(Some(explicit.unwrap_or(state.default_window)))
        }
    }
}
