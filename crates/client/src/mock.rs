use async_trait::async_trait;
use booking_core::models::{
    business::Business,
    busy_block::BusyBlock,
    reservation::{Reservation, ReservationRequest},
};
use chrono::NaiveDateTime;
use mockall::mock;

use crate::api::BookingBackend;

// Mock booking service for testing
mock! {
    pub BookingApi {}

    #[async_trait]
    impl BookingBackend for BookingApi {
        async fn list_businesses(&self, category: Option<String>) -> eyre::Result<Vec<Business>>;

        async fn get_business(&self, id: i64) -> eyre::Result<Option<Business>>;

        async fn busy_blocks(
            &self,
            business_id: i64,
            start: NaiveDateTime,
            end: NaiveDateTime,
        ) -> eyre::Result<Vec<BusyBlock>>;

        async fn create_reservation(
            &self,
            request: ReservationRequest,
            token: Option<String>,
        ) -> eyre::Result<Reservation>;
    }
}
