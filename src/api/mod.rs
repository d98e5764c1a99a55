//! REST API for on-demand simulation runs.
//!
//! Provides two endpoints:
//! - `POST /simulate`: run one simulated year from JSON parameters
//! - `GET /health`: liveness check

mod handlers;
mod types;

pub use types::{ErrorResponse, HealthResponse, SimulationRequest, SimulationResponse};

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

/// Application state shared across all request handlers.
///
/// Runs share nothing mutable: each request builds its own engine and
/// random source.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Upper bound on wall-clock time for one run.
    pub run_timeout: Duration,
    /// Largest station count a request may ask for.
    pub max_charge_points: u32,
}

/// Builds the axum router with all API routes.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured `Router` ready to serve.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/simulate", post(handlers::post_simulate))
        .route("/health", get(handlers::get_health))
        .with_state(state)
}

/// Binds to the given address and serves the API until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an `io::Error` if the TCP listener cannot bind to `addr` or the
/// server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(crate::telemetry::shutdown_signal())
        .await
}
