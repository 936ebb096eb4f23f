//! # Booking API
//!
//! The web server behind the booking front end. It serves business listings,
//! appointment slots, calendar grids and reservation submission to the UI,
//! backed by the remote booking service.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Provide cross-cutting concerns like authentication and error handling
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework. Slot computation lives in
//! `booking-core`; all data comes from the booking service through
//! `booking-client`.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for authentication and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use booking_client::{api::BookingBackend, loader::SlotLoader};
use booking_core::{
    clock::{Clock, SystemClock},
    hours::WorkingWindow,
};
use eyre::Result;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```ignore
/// let state = Arc::new(ApiState::new(backend, Arc::new(SystemClock), WorkingWindow::default()));
/// let app = booking_api::app(state);
/// ```
pub struct ApiState {
    /// Remote booking service
    pub backend: Arc<dyn BookingBackend>,

    /// Busy-block fetch plus slot generation
    pub loader: SlotLoader,

    /// Local wall-clock used to close past slots
    pub clock: Arc<dyn Clock>,

    /// Working window for businesses without published opening hours
    pub default_window: WorkingWindow,
}

impl ApiState {
    pub fn new(
        backend: Arc<dyn BookingBackend>,
        clock: Arc<dyn Clock>,
        default_window: WorkingWindow,
    ) -> Self {
        Self {
            loader: SlotLoader::new(backend.clone()),
            backend,
            clock,
            default_window,
        }
    }
}

/// Builds the application router with all routes attached to `state`
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Business listing, slots and calendar endpoints
        .merge(routes::business::routes())
        // Reservation submission endpoint
        .merge(routes::reservation::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and booking service
///
/// This function initializes logging, configures routes and middleware, and
/// serves HTTP until the listener fails.
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `backend` - Client of the remote booking service
pub async fn start_server(config: config::ApiConfig, backend: Arc<dyn BookingBackend>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(
        backend,
        Arc::new(SystemClock),
        config.default_window,
    ));

    // Apply CORS configuration if origins are specified
    let cors = config.cors_origins.as_ref().map(|origins| {
        let allowed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
            .allow_origin(allowed)
            .allow_credentials(true)
    });

    let mut app = app(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );
    if let Some(cors) = cors {
        app = app.layer(cors);
    }

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
