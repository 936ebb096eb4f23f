use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/businesses", get(handlers::business::list_businesses))
        .route("/api/businesses/:id", get(handlers::business::get_business))
        .route(
            "/api/businesses/:id/slots",
            get(handlers::slots::business_slots),
        )
        .route(
            "/api/businesses/:id/calendar",
            get(handlers::calendar::business_calendar),
        )
}
