use axum::{
    Json,
    extract::{Path, Query, State},
};
use booking_core::{errors::BookingError, models::business::Business};
use serde::Deserialize;
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

#[derive(Debug, Deserialize)]
pub struct BusinessListQuery {
    /// Only list businesses of this category
    pub category: Option<String>,
}

#[axum::debug_handler]
pub async fn list_businesses(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<BusinessListQuery>,
) -> Result<Json<Vec<Business>>, AppError> {
    let category = query.category.filter(|category| !category.trim().is_empty());
    let businesses = state.backend.list_businesses(category).await?;

    Ok(Json(businesses))
}

#[axum::debug_handler]
pub async fn get_business(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> Result<Json<Business>, AppError> {
    let business = fetch_business(&state, id).await?;
    Ok(Json(business))
}

/// Fetches a business or fails with `NotFound`
pub(crate) async fn fetch_business(state: &ApiState, id: i64) -> Result<Business, AppError> {
    state
        .backend
        .get_business(id)
        .await?
        .ok_or_else(|| AppError(BookingError::NotFound(format!("Business with ID {} not found", id))))
}
