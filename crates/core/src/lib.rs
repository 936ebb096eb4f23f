//! # Booking Core
//!
//! Domain types and the availability logic shared by every part of the
//! booking front end. Nothing in this crate performs I/O: the HTTP client and
//! the web server feed it data fetched from the remote booking service and
//! render what it returns.
//!
//! - **Models**: wire types exchanged with the booking service and the UI
//! - **Slots**: candidate appointment start-times for one day
//! - **Hours**: working windows and per-business opening hours
//! - **Calendar**: month grids for the date picker

/// Month grid layout for the date picker
pub mod calendar;
/// Source of the current local wall-clock time
pub mod clock;
/// Domain error type
pub mod errors;
/// Working windows and opening hours
pub mod hours;
/// Wire types shared with the booking service and the UI
pub mod models;
/// Appointment slot generation
pub mod slots;
