//! # Slot Loader
//!
//! Glue between the booking service and the slot generator: fetch the busy
//! blocks of one day, then compute the slots locally.
//!
//! A failed schedule query never fails the view. The loader logs it and
//! generates slots from an empty busy list, so every future slot shows as
//! available and past slots stay closed.
//!
//! Interactive callers that refetch whenever the selected date changes use
//! [`SlotLoader::load_latest`]: each call supersedes the ones still in flight,
//! and a superseded call returns `None` instead of a stale slot list.

use booking_core::{
    hours::WorkingWindow,
    models::{busy_block::BusyBlock, slot::TimeSlot},
    slots::generate_slots,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};
use tracing::{debug, warn};

use crate::api::BookingBackend;

/// What to generate slots for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRequest {
    pub business_id: i64,
    pub date: NaiveDate,
    pub duration_minutes: i64,
    pub window: WorkingWindow,
}

pub struct SlotLoader {
    backend: Arc<dyn BookingBackend>,
    generation: AtomicU64,
}

impl SlotLoader {
    pub fn new(backend: Arc<dyn BookingBackend>) -> Self {
        Self {
            backend,
            generation: AtomicU64::new(0),
        }
    }

    /// Fetches the day's busy blocks and generates its slots
    pub async fn load(&self, request: &SlotRequest, now: NaiveDateTime) -> Vec<TimeSlot> {
        let busy_blocks = self.fetch_busy_blocks(request.business_id, request.date).await;
        generate_slots(
            request.date,
            request.duration_minutes,
            &busy_blocks,
            &request.window,
            now,
        )
    }

    /// Like [`load`](Self::load), but returns `None` if another call started
    /// while this one was waiting on the booking service.
    pub async fn load_latest(
        &self,
        request: &SlotRequest,
        now: NaiveDateTime,
    ) -> Option<Vec<TimeSlot>> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let busy_blocks = self.fetch_busy_blocks(request.business_id, request.date).await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!(
                "Discarding superseded slot request: business_id={}, date={}",
                request.business_id, request.date
            );
            return None;
        }

        Some(generate_slots(
            request.date,
            request.duration_minutes,
            &busy_blocks,
            &request.window,
            now,
        ))
    }

    /// Busy blocks of `[date 00:00, date+1 00:00)`, empty on failure
    async fn fetch_busy_blocks(&self, business_id: i64, date: NaiveDate) -> Vec<BusyBlock> {
        let start = date.and_time(NaiveTime::MIN);
        let Some(end) = date.succ_opt().map(|next| next.and_time(NaiveTime::MIN)) else {
            return Vec::new();
        };

        match self.backend.busy_blocks(business_id, start, end).await {
            Ok(blocks) => blocks,
            Err(e) => {
                warn!(
                    "Schedule query failed, treating day as free: business_id={}, date={}, error={:#}",
                    business_id, date, e
                );
                Vec::new()
            }
        }
    }
}
