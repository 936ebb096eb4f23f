//! Prints the slot list of one business and day.
//!
//! ```text
//! slot-preview <business-id> <yyyy-MM-dd> [duration-minutes]
//! ```

use booking_api::config::parse_log_level;
use booking_client::{
    api::{BookingApiClient, BookingBackend},
    config::ClientConfig,
    loader::{SlotLoader, SlotRequest},
};
use booking_core::{
    clock::{Clock, SystemClock},
    hours::{WorkingWindow, effective_window},
    models::slot::SlotStatus,
};
use chrono::NaiveDate;
use color_eyre::eyre::{Result, WrapErr, eyre};
use dotenv::dotenv;
use std::{env, sync::Arc};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

const USAGE: &str = "usage: slot-preview <business-id> <yyyy-MM-dd> [duration-minutes]";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()));
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut args = env::args().skip(1);
    let business_id: i64 = args
        .next()
        .ok_or_else(|| eyre!(USAGE))?
        .parse()
        .wrap_err("Invalid business id")?;
    let date: NaiveDate = args
        .next()
        .ok_or_else(|| eyre!(USAGE))?
        .parse()
        .wrap_err("Invalid date, expected yyyy-MM-dd")?;
    let duration_minutes: i64 = match args.next() {
        Some(value) => value.parse().wrap_err("Invalid duration")?,
        None => 30,
    };

    let config = ClientConfig::from_env()?;
    let backend = Arc::new(BookingApiClient::new(&config)?);

    let business = backend
        .get_business(business_id)
        .await?
        .ok_or_else(|| eyre!("Business with ID {} not found", business_id))?;
    info!("Loaded business: id={}, name={}", business.id, business.name);

    let Some(window) = effective_window(&business.working_hours, date, WorkingWindow::default())
    else {
        println!("{} is closed on {}", business.name, date);
        return Ok(());
    };

    let loader = SlotLoader::new(backend);
    let request = SlotRequest {
        business_id,
        date,
        duration_minutes,
        window,
    };
    let slots = loader.load(&request, SystemClock.now()).await;

    println!("{} on {} ({} min)", business.name, date, duration_minutes);
    for slot in &slots {
        let marker = match slot.status {
            SlotStatus::Available => "available",
            SlotStatus::Occupied => "occupied",
            SlotStatus::Closed => "closed",
        };
        println!("  {}  {}", slot.time, marker);
    }
    let available = slots.iter().filter(|slot| slot.is_available()).count();
    println!("{} of {} slots available", available, slots.len());

    Ok(())
}
