use axum::http::StatusCode;
use booking_core::models::{
    business::DayOfWeek,
    busy_block::{BusyBlock, BusyKind},
    slot::{SlotStatus, TimeSlot},
};
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::test_utils::{TestContext, at, business, day, hours};

#[tokio::test]
async fn test_slots_with_explicit_window() {
    let monday = day(2024, 1, 15);
    let mut ctx = TestContext::new(at(monday, 8, 0));

    ctx.backend
        .expect_busy_blocks()
        .with(eq(7), eq(at(monday, 0, 0)), eq(at(day(2024, 1, 16), 0, 0)))
        .times(1)
        .returning(move |_, _, _| {
            Ok(vec![BusyBlock {
                start: at(monday, 9, 30),
                end: at(monday, 9, 40),
                kind: BusyKind::Occupied,
            }])
        });
    ctx.backend
        .expect_get_business()
        .with(eq(7))
        .times(1)
        .returning(|id| {
            Ok(Some(business(
                id,
                vec![hours(DayOfWeek::Monday, "12:00", "14:00")],
            )))
        });

    let server = ctx.server();
    let response = server
        .get("/api/businesses/7/slots")
        .add_query_param("date", "2024-01-15")
        .add_query_param("duration", 20)
        .add_query_param("workStart", "09:00")
        .add_query_param("workEnd", "10:00")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let slots: Vec<TimeSlot> = response.json();
    assert_eq!(
        slots,
        vec![
            TimeSlot::new(at(monday, 9, 0), SlotStatus::Available),
            TimeSlot::new(at(monday, 9, 10), SlotStatus::Available),
            TimeSlot::new(at(monday, 9, 20), SlotStatus::Occupied),
            TimeSlot::new(at(monday, 9, 30), SlotStatus::Occupied),
            TimeSlot::new(at(monday, 9, 40), SlotStatus::Available),
        ]
    );
}

#[tokio::test]
async fn test_slots_wire_format() {
    let monday = day(2024, 1, 15);
    let mut ctx = TestContext::new(at(monday, 8, 0));
    ctx.backend
        .expect_get_business()
        .returning(|id| Ok(Some(business(id, Vec::new()))));
    ctx.backend
        .expect_busy_blocks()
        .returning(|_, _, _| Ok(Vec::new()));

    let server = ctx.server();
    let response = server
        .get("/api/businesses/7/slots")
        .add_query_param("date", "2024-01-15")
        .add_query_param("duration", 60)
        .add_query_param("workStart", "09:00")
        .add_query_param("workEnd", "10:00")
        .await;

    let body: Value = response.json();
    assert_eq!(
        body,
        serde_json::json!([
            { "time": "09:00", "datetime": "2024-01-15T09:00:00", "status": "available" }
        ])
    );
}

#[tokio::test]
async fn test_slots_use_business_hours() {
    let monday = day(2024, 1, 15);
    let mut ctx = TestContext::new(at(day(2024, 1, 14), 12, 0));

    ctx.backend
        .expect_get_business()
        .with(eq(7))
        .returning(|id| {
            Ok(Some(business(
                id,
                vec![
                    hours(DayOfWeek::Monday, "10:00", "12:00"),
                    hours(DayOfWeek::Tuesday, "08:00", "20:00"),
                ],
            )))
        });
    ctx.backend
        .expect_busy_blocks()
        .returning(|_, _, _| Ok(Vec::new()));

    let server = ctx.server();
    let response = server
        .get("/api/businesses/7/slots")
        .add_query_param("date", "2024-01-15")
        .add_query_param("duration", 60)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let slots: Vec<TimeSlot> = response.json();
    assert_eq!(slots.len(), 7);
    assert_eq!(slots[0], TimeSlot::new(at(monday, 10, 0), SlotStatus::Available));
    assert_eq!(slots[6], TimeSlot::new(at(monday, 11, 0), SlotStatus::Available));
}

#[tokio::test]
async fn test_slots_empty_on_closed_day() {
    let mut ctx = TestContext::new(at(day(2024, 1, 14), 12, 0));

    ctx.backend.expect_get_business().returning(|id| {
        let mut monday = hours(DayOfWeek::Monday, "09:00", "18:00");
        monday.closed = true;
        Ok(Some(business(id, vec![monday])))
    });
    ctx.backend.expect_busy_blocks().times(0);

    let server = ctx.server();
    let response = server
        .get("/api/businesses/7/slots")
        .add_query_param("date", "2024-01-15")
        .add_query_param("duration", 30)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let slots: Vec<TimeSlot> = response.json();
    assert!(slots.is_empty());
}

#[tokio::test]
async fn test_slots_default_window_without_published_hours() {
    let mut ctx = TestContext::new(at(day(2024, 1, 14), 12, 0));

    ctx.backend
        .expect_get_business()
        .returning(|id| Ok(Some(business(id, Vec::new()))));
    ctx.backend
        .expect_busy_blocks()
        .returning(|_, _, _| Ok(Vec::new()));

    let server = ctx.server();
    let response = server
        .get("/api/businesses/7/slots")
        .add_query_param("date", "2024-01-15")
        .add_query_param("duration", 30)
        .await;

    let slots: Vec<TimeSlot> = response.json();
    assert_eq!(slots.len(), 52);
    assert_eq!(slots[0].time, "09:00");
    assert_eq!(slots[51].time, "17:30");
}

#[test_log::test(tokio::test)]
async fn test_slots_fall_back_when_business_lookup_fails() {
    let mut ctx = TestContext::new(at(day(2024, 1, 14), 12, 0));

    ctx.backend
        .expect_get_business()
        .returning(|_| Err(eyre::eyre!("connection reset")));
    ctx.backend
        .expect_busy_blocks()
        .returning(|_, _, _| Ok(Vec::new()));

    let server = ctx.server();
    let response = server
        .get("/api/businesses/7/slots")
        .add_query_param("date", "2024-01-15")
        .add_query_param("duration", 30)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let slots: Vec<TimeSlot> = response.json();
    assert_eq!(slots.len(), 52);
}

#[test_log::test(tokio::test)]
async fn test_slots_served_when_schedule_unavailable() {
    let mut ctx = TestContext::new(at(day(2024, 1, 14), 12, 0));

    ctx.backend
        .expect_get_business()
        .returning(|id| Ok(Some(business(id, Vec::new()))));
    ctx.backend
        .expect_busy_blocks()
        .returning(|_, _, _| Err(eyre::eyre!("503 Service Unavailable")));

    let server = ctx.server();
    let response = server
        .get("/api/businesses/7/slots")
        .add_query_param("date", "2024-01-15")
        .add_query_param("duration", 30)
        .add_query_param("workStart", "09:00")
        .add_query_param("workEnd", "11:00")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let slots: Vec<TimeSlot> = response.json();
    assert_eq!(slots.len(), 10);
    assert!(slots.iter().all(TimeSlot::is_available));
}

#[tokio::test]
async fn test_slots_before_now_are_closed() {
    let monday = day(2024, 1, 15);
    let mut ctx = TestContext::new(at(monday, 12, 0));

    ctx.backend
        .expect_get_business()
        .returning(|id| Ok(Some(business(id, Vec::new()))));
    ctx.backend
        .expect_busy_blocks()
        .returning(|_, _, _| Ok(Vec::new()));

    let server = ctx.server();
    let response = server
        .get("/api/businesses/7/slots")
        .add_query_param("date", "2024-01-15")
        .add_query_param("duration", 30)
        .add_query_param("workStart", "11:00")
        .add_query_param("workEnd", "13:00")
        .await;

    let slots: Vec<TimeSlot> = response.json();
    let closed: Vec<&str> = slots
        .iter()
        .filter(|slot| slot.status == SlotStatus::Closed)
        .map(|slot| slot.time.as_str())
        .collect();
    assert_eq!(closed, vec!["11:00", "11:10", "11:20", "11:30", "11:40", "11:50"]);
    assert_eq!(slots.last().map(|slot| slot.time.as_str()), Some("12:30"));
    assert!(slots.iter().skip(6).all(TimeSlot::is_available));
}

#[tokio::test]
async fn test_slots_reject_non_positive_duration() {
    let ctx = TestContext::new(at(day(2024, 1, 14), 12, 0));
    let server = ctx.server();

    let response = server
        .get("/api/businesses/7/slots")
        .add_query_param("date", "2024-01-15")
        .add_query_param("duration", 0)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Validation error: duration must be a positive number of minutes"
    );
}

#[tokio::test]
async fn test_slots_reject_malformed_window() {
    let ctx = TestContext::new(at(day(2024, 1, 14), 12, 0));
    let server = ctx.server();

    let response = server
        .get("/api/businesses/7/slots")
        .add_query_param("date", "2024-01-15")
        .add_query_param("duration", 30)
        .add_query_param("workStart", "9am")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_slots_require_date() {
    let ctx = TestContext::new(at(day(2024, 1, 14), 12, 0));
    let server = ctx.server();

    let response = server
        .get("/api/businesses/7/slots")
        .add_query_param("duration", 30)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_slots_unknown_business() {
    let mut ctx = TestContext::new(at(day(2024, 1, 14), 12, 0));
    ctx.backend.expect_get_business().returning(|_| Ok(None));

    let server = ctx.server();
    let response = server
        .get("/api/businesses/99/slots")
        .add_query_param("date", "2024-01-15")
        .add_query_param("duration", 30)
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_slots_unknown_business_with_explicit_window() {
    let mut ctx = TestContext::new(at(day(2024, 1, 14), 12, 0));
    ctx.backend
        .expect_get_business()
        .with(eq(99))
        .returning(|_| Ok(None));
    ctx.backend.expect_busy_blocks().times(0);

    let server = ctx.server();
    let response = server
        .get("/api/businesses/99/slots")
        .add_query_param("date", "2024-01-15")
        .add_query_param("duration", 30)
        .add_query_param("workStart", "09:00")
        .add_query_param("workEnd", "18:00")
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Resource not found: Business with ID 99 not found");
}

#[test_log::test(tokio::test)]
async fn test_slots_keep_explicit_window_when_business_lookup_fails() {
    let mut ctx = TestContext::new(at(day(2024, 1, 14), 12, 0));
    ctx.backend
        .expect_get_business()
        .returning(|_| Err(eyre::eyre!("connection reset")));
    ctx.backend
        .expect_busy_blocks()
        .returning(|_, _, _| Ok(Vec::new()));

    let server = ctx.server();
    let response = server
        .get("/api/businesses/7/slots")
        .add_query_param("date", "2024-01-15")
        .add_query_param("duration", 30)
        .add_query_param("workStart", "14:00")
        .add_query_param("workEnd", "15:00")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let slots: Vec<TimeSlot> = response.json();
    assert_eq!(
        slots.iter().map(|slot| slot.time.as_str()).collect::<Vec<_>>(),
        vec!["14:00", "14:10", "14:20", "14:30"]
    );
}

#[tokio::test]
async fn test_slots_empty_at_end_of_calendar() {
    let mut ctx = TestContext::new(at(day(2024, 1, 14), 12, 0));
    ctx.backend
        .expect_get_business()
        .returning(|id| Ok(Some(business(id, Vec::new()))));
    ctx.backend
        .expect_busy_blocks()
        .returning(|_, _, _| Ok(Vec::new()));

    let server = ctx.server();
    let response = server
        .get("/api/businesses/7/slots")
        .add_query_param("date", "+262143-12-31")
        .add_query_param("duration", 30)
        .add_query_param("workStart", "22:00")
        .add_query_param("workEnd", "24:00")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let slots: Vec<TimeSlot> = response.json();
    assert!(slots.is_empty());
}
