//! # Booking Client
//!
//! Talks to the remote booking service and turns its schedule data into slot
//! lists.
//!
//! - **Api**: the [`BookingBackend`](api::BookingBackend) trait and its HTTP implementation
//! - **Loader**: busy-block fetch plus slot generation, with stale-response handling
//! - **Config**: connection settings read from the environment
//! - **Mock**: mockall double of the backend for tests

pub mod api;
pub mod config;
pub mod loader;

pub mod mock;
