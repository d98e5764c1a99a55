//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::Utc;
use tracing::{error, info, warn};

use super::AppState;
use super::types::{ErrorResponse, HealthResponse, SimulationRequest, SimulationResponse};
use crate::error::ConfigurationError;
use crate::sim::simulate_seeded;
use crate::sim::types::SimulationParameters;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Runs one simulated year.
///
/// `POST /simulate` → 200 + `SimulationResponse` JSON
/// invalid parameters or more than `AppState::max_charge_points` → 400 + `ErrorResponse`
/// run exceeding `AppState::run_timeout` → 503 + `ErrorResponse`
pub async fn post_simulate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SimulationRequest>,
) -> Result<Json<SimulationResponse>, ApiError> {
    let params = SimulationParameters::try_from(&req)
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.to_string()))?;
    if params.num_charge_points > state.max_charge_points {
        let err = ConfigurationError::TooManyChargePoints {
            value: f64::from(params.num_charge_points),
            max: state.max_charge_points,
        };
        return Err(api_error(StatusCode::BAD_REQUEST, err.to_string()));
    }
    let seed = req.seed.unwrap_or_else(rand::random);
    info!(
        charge_points = params.num_charge_points,
        seed, "simulation requested"
    );

    let task = tokio::task::spawn_blocking(move || simulate_seeded(&params, seed));
    match tokio::time::timeout(state.run_timeout, task).await {
        Ok(Ok(Ok(result))) => Ok(Json(SimulationResponse { result, seed })),
        Ok(Ok(Err(e))) => Err(api_error(StatusCode::BAD_REQUEST, e.to_string())),
        Ok(Err(e)) => {
            error!(error = %e, "simulation task failed");
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "simulation task failed",
            ))
        }
        Err(_) => {
            warn!(timeout = ?state.run_timeout, seed, "simulation timed out");
            Err(api_error(
                StatusCode::SERVICE_UNAVAILABLE,
                format!("simulation exceeded {:?}", state.run_timeout),
            ))
        }
    }
}

/// `GET /health` → 200 + `HealthResponse` JSON
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}
