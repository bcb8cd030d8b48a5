//! # Slotbook API
//!
//! Web server for the Slotbook appointment-booking service: user CRUD,
//! appointment booking and cancellation, and day-level slot availability.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: define API endpoints and URL structure
//! - **Handlers**: implement request processing logic
//! - **Middleware**: error mapping shared by every endpoint
//! - **Validation**: request-level checks the core assumes were done
//! - **Config**: environment-driven configuration
//!
//! The API uses Axum as the web framework over the in-memory store from
//! `slotbook-db`; the actual slot arithmetic lives in `slotbook-core`.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement endpoint logic
pub mod handlers;
/// Error-mapping middleware
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;
/// Request validation helpers
pub mod validation;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use slotbook_core::config::SchedulingConfig;
use slotbook_db::Store;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state accessible to all request handlers
pub struct ApiState {
    /// In-memory store for users and appointments
    pub store: Arc<Store>,
    /// Scheduling constants consumed by the availability engine
    pub scheduling: SchedulingConfig,
}

/// Builds the application router with all routes attached
///
/// Factored out of [`start_server`] so integration tests can mount the
/// router without binding a socket.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // User CRUD endpoints
        .merge(routes::users::routes())
        // Appointment booking endpoints
        .merge(routes::appointments::routes())
        // Slot availability endpoint
        .merge(routes::availability::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and store
///
/// Initializes logging, assembles the router with CORS and timeout layers,
/// and serves until the process is stopped.
pub async fn start_server(config: config::ApiConfig, store: Arc<Store>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState {
        store,
        scheduling: config.scheduling.clone(),
    });

    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PATCH,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .map(|origin| origin.parse().unwrap())
                    .collect::<Vec<_>>(),
            );

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(tower_http::timeout::TimeoutLayer::new(
                std::time::Duration::from_secs(config.request_timeout),
            ))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
