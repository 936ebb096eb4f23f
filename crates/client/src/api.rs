//! # Booking Service Client
//!
//! Thin wrapper around the remote booking REST API. The service owns every
//! piece of persistent state; this module only moves JSON back and forth.
//!
//! ## Endpoints
//!
//! - `GET  /api/businesses?category=..` - business listing
//! - `GET  /api/businesses/{id}` - business detail with opening hours
//! - `GET  /api/businesses/{id}/schedule?start=..&end=..` - busy blocks
//! - `POST /api/reservations` - reservation creation
//!
//! All date-times are naive local values in `yyyy-MM-dd'T'HH:mm:ss`.

use async_trait::async_trait;
use booking_core::models::{
    business::Business,
    busy_block::BusyBlock,
    format_local_datetime,
    reservation::{Reservation, ReservationRequest},
};
use chrono::NaiveDateTime;
use eyre::{Result, WrapErr, eyre};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::config::ClientConfig;

/// Operations the front end needs from the booking service.
///
/// Implemented over HTTP by [`BookingApiClient`]; tests substitute
/// [`MockBookingApi`](crate::mock::MockBookingApi).
#[async_trait]
pub trait BookingBackend: Send + Sync {
    /// Lists businesses, optionally restricted to one category
    async fn list_businesses(&self, category: Option<String>) -> Result<Vec<Business>>;

    /// Fetches one business; `None` if the service does not know it
    async fn get_business(&self, id: i64) -> Result<Option<Business>>;

    /// Busy blocks of a business between two local date-times
    async fn busy_blocks(
        &self,
        business_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<BusyBlock>>;

    /// Creates a reservation; `token` overrides the configured bearer token
    async fn create_reservation(
        &self,
        request: ReservationRequest,
        token: Option<String>,
    ) -> Result<Reservation>;
}

/// Error payload returned by the booking service
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// HTTP implementation of [`BookingBackend`]
#[derive(Debug, Clone)]
pub struct BookingApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl BookingApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .wrap_err("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            token: config.token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token.or(self.token.as_deref()) {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub fn businesses_request(&self, category: Option<&str>) -> RequestBuilder {
        let builder = self.http.get(self.url("/api/businesses"));
        let builder = match category {
            Some(category) => builder.query(&[("category", category)]),
            None => builder,
        };
        self.authorize(builder, None)
    }

    pub fn business_request(&self, id: i64) -> RequestBuilder {
        self.authorize(self.http.get(self.url(&format!("/api/businesses/{}", id))), None)
    }

    pub fn schedule_request(
        &self,
        business_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> RequestBuilder {
        let builder = self
            .http
            .get(self.url(&format!("/api/businesses/{}/schedule", business_id)))
            .query(&[
                ("start", format_local_datetime(start)),
                ("end", format_local_datetime(end)),
            ]);
        self.authorize(builder, None)
    }

    pub fn reservation_request(
        &self,
        request: &ReservationRequest,
        token: Option<&str>,
    ) -> RequestBuilder {
        self.authorize(self.http.post(self.url("/api/reservations")).json(request), token)
    }
}

/// Turns a non-success response into an error carrying the service's message
async fn ensure_success(response: Response, action: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&error_text)
        .ok()
        .and_then(|body| body.message.or(body.error))
        .unwrap_or(error_text);

    Err(eyre!("Failed to {}: {} {}", action, status, message))
}

#[async_trait]
impl BookingBackend for BookingApiClient {
    async fn list_businesses(&self, category: Option<String>) -> Result<Vec<Business>> {
        let response = self
            .businesses_request(category.as_deref())
            .send()
            .await
            .wrap_err("Booking service unreachable")?;
        let response = ensure_success(response, "list businesses").await?;

        let businesses: Vec<Business> = response.json().await?;
        debug!("Fetched {} businesses", businesses.len());
        Ok(businesses)
    }

    async fn get_business(&self, id: i64) -> Result<Option<Business>> {
        let response = self
            .business_request(id)
            .send()
            .await
            .wrap_err("Booking service unreachable")?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("Business not found: id={}", id);
            return Ok(None);
        }
        let response = ensure_success(response, "fetch business").await?;

        Ok(Some(response.json().await?))
    }

    async fn busy_blocks(
        &self,
        business_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<BusyBlock>> {
        let response = self
            .schedule_request(business_id, start, end)
            .send()
            .await
            .wrap_err("Booking service unreachable")?;
        let response = ensure_success(response, "fetch schedule").await?;

        let blocks: Vec<BusyBlock> = response.json().await?;
        debug!(
            "Fetched {} busy blocks: business_id={}, start={}, end={}",
            blocks.len(),
            business_id,
            start,
            end
        );
        Ok(blocks)
    }

    async fn create_reservation(
        &self,
        request: ReservationRequest,
        token: Option<String>,
    ) -> Result<Reservation> {
        let response = self
            .reservation_request(&request, token.as_deref())
            .send()
            .await
            .wrap_err("Booking service unreachable")?;
        let response = ensure_success(response, "create reservation").await?;

        let reservation: Reservation = response.json().await?;
        debug!(
            "Reservation created: id={}, business_id={}, datetime={}",
            reservation.id, reservation.business_id, reservation.datetime
        );
        Ok(reservation)
    }
}
