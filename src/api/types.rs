//! API request and response types.
//!
//! Field names follow the camelCase boundary names used by the JSON form of
//! `SimulationParameters`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::sim::stats::SimulationResult;
use crate::sim::types::{
    DEFAULT_ARRIVAL_MULTIPLIER, DEFAULT_CHARGING_POWER_KW, DEFAULT_CONSUMPTION_KWH_PER_100KM,
    SimulationParameters,
};

/// Body of `POST /simulate`.
///
/// The station count is read as a plain JSON number so that fractional,
/// negative, and missing values reach validation instead of failing
/// deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct SimulationRequest {
    #[serde(rename = "numChargePoints")]
    pub num_charge_points: Option<f64>,
    #[serde(
        rename = "arrivalProbabilityMultiplier",
        alias = "arrivalProbabilityMult"
    )]
    pub arrival_probability_multiplier: Option<f64>,
    #[serde(rename = "carConsumptionKWhPer100Km", alias = "carConsumption")]
    pub car_consumption_kwh_per_100km: Option<f64>,
    #[serde(rename = "chargingPowerKW", alias = "chargingPower")]
    pub charging_power_kw: Option<f64>,
    /// Seed for a reproducible run; a fresh one is drawn when absent.
    pub seed: Option<u64>,
}

impl TryFrom<&SimulationRequest> for SimulationParameters {
    type Error = ConfigurationError;

    fn try_from(req: &SimulationRequest) -> Result<Self, Self::Error> {
        let count = req
            .num_charge_points
            .ok_or(ConfigurationError::NoChargePoints)?;
        if !count.is_finite() {
            return Err(ConfigurationError::NonFinite {
                field: "numChargePoints",
            });
        }
        if count.fract() != 0.0 {
            return Err(ConfigurationError::FractionalChargePoints { value: count });
        }
        if count <= 0.0 {
            return Err(ConfigurationError::NoChargePoints);
        }
        if count > f64::from(u32::MAX) {
            return Err(ConfigurationError::TooManyChargePoints {
                value: count,
                max: u32::MAX,
            });
        }

        let params = SimulationParameters {
            num_charge_points: count as u32,
            arrival_probability_multiplier: req
                .arrival_probability_multiplier
                .unwrap_or(DEFAULT_ARRIVAL_MULTIPLIER),
            car_consumption_kwh_per_100km: req
                .car_consumption_kwh_per_100km
                .unwrap_or(DEFAULT_CONSUMPTION_KWH_PER_100KM),
            charging_power_kw: req.charging_power_kw.unwrap_or(DEFAULT_CHARGING_POWER_KW),
        };
        params.validate()?;
        Ok(params)
    }
}

/// Result of one run plus the seed that reproduces it.
#[derive(Debug, Serialize)]
pub struct SimulationResponse {
    #[serde(flatten)]
    pub result: SimulationResult,
    pub seed: u64,
}

/// Liveness check body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Error response body for 4xx/5xx errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
