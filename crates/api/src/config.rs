//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the booking
//! front-end server. It retrieves configuration values from environment
//! variables and provides defaults where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `BOOKING_API_URL`: Base URL of the remote booking service (required)
//! - `BOOKING_API_TOKEN`: Service token sent to the booking service (optional)
//! - `BOOKING_API_TIMEOUT_SECONDS`: Timeout for booking service calls (default: 10)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Timeout for incoming requests (default: 30)
//! - `WORK_START` / `WORK_END`: Working window used when a business publishes
//!   no opening hours (default: "09:00" / "18:00")

use booking_client::config::ClientConfig;
use booking_core::hours::{DEFAULT_WORK_END, DEFAULT_WORK_START, WorkingWindow};
use eyre::{Result, WrapErr, eyre};
use std::env;
use tracing::Level;

/// Configuration for the booking front-end server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use booking_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Connection settings for the remote booking service
    pub client: ClientConfig,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Working window for businesses without published opening hours
    pub default_window: WorkingWindow,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The BOOKING_API_URL environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    /// - WORK_START or WORK_END is not an `HH:mm` time
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Booking service settings
        let client = ClientConfig::from_env()?;

        // Logging settings
        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Slot settings
        let work_start = env::var("WORK_START").unwrap_or_else(|_| DEFAULT_WORK_START.to_string());
        let work_end = env::var("WORK_END").unwrap_or_else(|_| DEFAULT_WORK_END.to_string());
        let default_window = WorkingWindow::parse(&work_start, &work_end)
            .ok_or_else(|| eyre!("Invalid WORK_START/WORK_END values: {}-{}", work_start, work_end))?;

        Ok(Self {
            host,
            port,
            client,
            log_level,
            cors_origins,
            request_timeout,
            default_window,
        })
    }

    /// Returns the server address as a string
    ///
    /// # Returns
    ///
    /// * `String` - Formatted server address (e.g., "127.0.0.1:8080")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Maps a `LOG_LEVEL` value to a tracing level, defaulting to INFO
pub fn parse_log_level(value: &str) -> Level {
    match value.to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
