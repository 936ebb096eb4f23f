use eyre::{Result, WrapErr, eyre};
use std::env;

/// Connection settings for the remote booking service.
///
/// Loaded from:
///
/// - `BOOKING_API_URL`: base URL of the booking service (required)
/// - `BOOKING_API_TOKEN`: bearer token attached to every request (optional)
/// - `BOOKING_API_TIMEOUT_SECONDS`: per-request timeout (default: 10)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout_secs: 10,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("BOOKING_API_URL")
            .map_err(|_| eyre!("BOOKING_API_URL environment variable not set"))?;

        let token = env::var("BOOKING_API_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        let timeout_secs = env::var("BOOKING_API_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .wrap_err("Invalid BOOKING_API_TIMEOUT_SECONDS value")?;

        Ok(Self {
            base_url,
            token,
            timeout_secs,
        })
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
