//! Core simulation types: time constants, run parameters, and run output.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

use super::series::PowerDemandSeries;
use super::session::ChargingSession;

/// Width of one tick in minutes.
pub const MINUTES_PER_TICK: usize = 15;
/// Ticks in one hour.
pub const TICKS_PER_HOUR: usize = 60 / MINUTES_PER_TICK;
/// Hours in one simulated day.
pub const HOURS_PER_DAY: usize = 24;
/// Ticks in one simulated day.
pub const TICKS_PER_DAY: usize = TICKS_PER_HOUR * HOURS_PER_DAY;
/// Days in the simulated year.
pub const DAYS_PER_YEAR: usize = 365;
/// Ticks in the simulated year.
pub const TOTAL_TICKS: usize = TICKS_PER_DAY * DAYS_PER_YEAR;
/// Width of one tick in hours.
pub const TICK_HOURS: f64 = MINUTES_PER_TICK as f64 / 60.0;

/// Default arrival probability multiplier (percent).
pub const DEFAULT_ARRIVAL_MULTIPLIER: f64 = 100.0;
/// Default vehicle consumption (kWh per 100 km).
pub const DEFAULT_CONSUMPTION_KWH_PER_100KM: f64 = 18.0;
/// Default charging power per charge point (kW).
pub const DEFAULT_CHARGING_POWER_KW: f64 = 11.0;

/// Parameters for one simulated year. Immutable for the duration of a run.
///
/// The JSON form uses the boundary field names (`numChargePoints`, ...) and
/// also accepts the shorter legacy names for the optional fields.
///
/// # Examples
///
/// ```
/// use chargepoint_sim::sim::types::SimulationParameters;
///
/// let params = SimulationParameters::new(10);
/// assert_eq!(params.charging_power_kw, 11.0);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Number of charge points (stations).
    #[serde(rename = "numChargePoints")]
    pub num_charge_points: u32,
    /// Scaling applied to the empirical arrival curve, in percent.
    #[serde(
        rename = "arrivalProbabilityMultiplier",
        alias = "arrivalProbabilityMult",
        default = "default_arrival_multiplier"
    )]
    pub arrival_probability_multiplier: f64,
    /// Vehicle consumption in kWh per 100 km.
    #[serde(
        rename = "carConsumptionKWhPer100Km",
        alias = "carConsumption",
        default = "default_consumption"
    )]
    pub car_consumption_kwh_per_100km: f64,
    /// Charging power of every charge point in kW.
    #[serde(
        rename = "chargingPowerKW",
        alias = "chargingPower",
        default = "default_charging_power"
    )]
    pub charging_power_kw: f64,
}

fn default_arrival_multiplier() -> f64 {
    DEFAULT_ARRIVAL_MULTIPLIER
}

fn default_consumption() -> f64 {
    DEFAULT_CONSUMPTION_KWH_PER_100KM
}

fn default_charging_power() -> f64 {
    DEFAULT_CHARGING_POWER_KW
}

impl SimulationParameters {
    /// Creates parameters for `num_charge_points` stations with default
    /// multiplier, consumption, and charging power.
    pub fn new(num_charge_points: u32) -> Self {
        Self {
            num_charge_points,
            arrival_probability_multiplier: DEFAULT_ARRIVAL_MULTIPLIER,
            car_consumption_kwh_per_100km: DEFAULT_CONSUMPTION_KWH_PER_100KM,
            charging_power_kw: DEFAULT_CHARGING_POWER_KW,
        }
    }

    /// Rejects degenerate numeric input before a run starts.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigurationError` found, checking station count,
    /// charging power, consumption, then the arrival multiplier.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.num_charge_points == 0 {
            return Err(ConfigurationError::NoChargePoints);
        }
        require_positive("chargingPowerKW", self.charging_power_kw)?;
        require_positive("carConsumptionKWhPer100Km", self.car_consumption_kwh_per_100km)?;

        let multiplier = self.arrival_probability_multiplier;
        if !multiplier.is_finite() {
            return Err(ConfigurationError::NonFinite {
                field: "arrivalProbabilityMultiplier",
            });
        }
        if multiplier < 0.0 {
            return Err(ConfigurationError::Negative {
                field: "arrivalProbabilityMultiplier",
                value: multiplier,
            });
        }
        Ok(())
    }

    /// Energy needed per driven kilometre (kWh/km).
    pub fn consumption_kwh_per_km(&self) -> f64 {
        self.car_consumption_kwh_per_100km / 100.0
    }

    /// Aggregate power if every charge point draws at once (kW).
    pub fn theoretical_max_power_kw(&self) -> f64 {
        f64::from(self.num_charge_points) * self.charging_power_kw
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigurationError> {
    if !value.is_finite() {
        return Err(ConfigurationError::NonFinite { field });
    }
    if value <= 0.0 {
        return Err(ConfigurationError::NonPositive { field, value });
    }
    Ok(())
}

/// Completed engine state, handed to the statistics aggregator.
#[derive(Debug, Clone)]
pub struct SimulationRun {
    /// Parameters the run was executed with.
    pub params: SimulationParameters,
    /// Aggregate charging power per tick.
    pub series: PowerDemandSeries,
    /// Number of arrivals that reserved a station.
    pub charging_events: u64,
    /// One record per charging event, in start order.
    pub sessions: Vec<ChargingSession>,
}
