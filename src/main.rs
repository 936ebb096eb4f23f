use booking_api::config::ApiConfig;
use booking_client::api::BookingApiClient;
use color_eyre::eyre::Result;
use dotenv::dotenv;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Create the booking service client
    let backend = BookingApiClient::new(&config.client)?;

    // Start API server
    booking_api::start_server(config, Arc::new(backend)).await?;

    Ok(())
}
