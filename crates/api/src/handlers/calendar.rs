use axum::{
    Json,
    extract::{Path, Query, State},
};
use booking_core::{calendar::month_grid, errors::BookingError, models::calendar::CalendarDay};
use chrono::Datelike;
use serde::Deserialize;
use std::sync::Arc;

use crate::{ApiState, handlers::business::fetch_business, middleware::error_handling::AppError};

/// Month to lay out; defaults to the current month
#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[axum::debug_handler]
pub async fn business_calendar(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<Vec<CalendarDay>>, AppError> {
    let today = state.clock.now().date();
    let year = query.year.unwrap_or(today.year());
    let month = query.month.unwrap_or(today.month());

    if !(1..=12).contains(&month) {
        return Err(AppError(BookingError::Validation(format!(
            "month must be between 1 and 12, got {}",
            month
        ))));
    }

    let business = fetch_business(&state, id).await?;
    let grid = month_grid(year, month, &business.working_hours, state.default_window, today);

    Ok(Json(grid))
}
