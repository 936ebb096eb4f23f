use std::sync::Arc;

use axum_test::TestServer;
use booking_api::ApiState;
use booking_client::mock::MockBookingApi;
use booking_core::{
    clock::FixedClock,
    hours::WorkingWindow,
    models::business::{Business, DayOfWeek, WorkingHours},
};
use chrono::{NaiveDate, NaiveDateTime};

pub struct TestContext {
    pub backend: MockBookingApi,
    pub now: NaiveDateTime,
    pub default_window: WorkingWindow,
}

impl TestContext {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            backend: MockBookingApi::new(),
            now,
            default_window: WorkingWindow::default(),
        }
    }

    // Build a test server over the mocked booking service and a fixed clock
    pub fn server(self) -> TestServer {
        let state = Arc::new(ApiState::new(
            Arc::new(self.backend),
            Arc::new(FixedClock(self.now)),
            self.default_window,
        ));

        TestServer::new(booking_api::app(state)).unwrap()
    }
}

pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, 0).unwrap()
}

pub fn hours(day_of_week: DayOfWeek, open: &str, close: &str) -> WorkingHours {
    WorkingHours {
        day_of_week,
        open_time: open.to_string(),
        close_time: close.to_string(),
        closed: false,
    }
}

pub fn business(id: i64, working_hours: Vec<WorkingHours>) -> Business {
    Business {
        id,
        name: "Studio Lumen".to_string(),
        category: Some("barber".to_string()),
        address: Some("12 Harbour Street".to_string()),
        description: None,
        working_hours,
    }
}
