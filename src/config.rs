//! TOML-based scenario configuration and preset definitions.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::error::ConfigurationError;
use crate::sim::types::{
    DEFAULT_ARRIVAL_MULTIPLIER, DEFAULT_CHARGING_POWER_KW, DEFAULT_CONSUMPTION_KWH_PER_100KM,
    SimulationParameters,
};

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the baseline scenario. Load from
/// TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Run-wide settings.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Charge point count and power.
    #[serde(default)]
    pub charge_points: ChargePointConfig,
    /// Vehicle fleet parameters.
    #[serde(default)]
    pub vehicles: VehicleConfig,
    /// Arrival intensity.
    #[serde(default)]
    pub traffic: TrafficConfig,
}

/// Run-wide settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Random seed. A fresh seed is drawn when absent.
    pub seed: Option<u64>,
}

/// Charge point count and power.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChargePointConfig {
    /// Number of charge points (must be > 0).
    pub count: u32,
    /// Charging power of every point (kW, must be > 0).
    pub charging_power_kw: f64,
}

impl Default for ChargePointConfig {
    fn default() -> Self {
        Self {
            count: 20,
            charging_power_kw: DEFAULT_CHARGING_POWER_KW,
        }
    }
}

/// Vehicle fleet parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VehicleConfig {
    /// Consumption in kWh per 100 km (must be > 0).
    pub consumption_kwh_per_100km: f64,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            consumption_kwh_per_100km: DEFAULT_CONSUMPTION_KWH_PER_100KM,
        }
    }
}

/// Arrival intensity.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrafficConfig {
    /// Percentage applied to the empirical arrival curve (100 = as measured).
    pub arrival_probability_multiplier: f64,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            arrival_probability_multiplier: DEFAULT_ARRIVAL_MULTIPLIER,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"charge_points.count"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<ConfigurationError> for ConfigError {
    fn from(err: ConfigurationError) -> Self {
        let field = match err.field() {
            Some("numChargePoints") => "charge_points.count",
            Some("chargingPowerKW") => "charge_points.charging_power_kw",
            Some("carConsumptionKWhPer100Km") => "vehicles.consumption_kwh_per_100km",
            Some("arrivalProbabilityMultiplier") => "traffic.arrival_probability_multiplier",
            Some(other) => other,
            None => "scenario",
        };
        Self::new(field, err.to_string())
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario: 20 points at 11 kW, 18 kWh/100 km,
    /// measured arrival rates.
    pub fn baseline() -> Self {
        Self::default()
    }

    /// Returns the fast-charging preset: few high-power points.
    pub fn fast_charging() -> Self {
        Self {
            charge_points: ChargePointConfig {
                count: 8,
                charging_power_kw: 50.0,
            },
            ..Self::default()
        }
    }

    /// Returns the busy-depot preset: many points, doubled arrivals.
    pub fn busy_depot() -> Self {
        Self {
            charge_points: ChargePointConfig {
                count: 30,
                ..ChargePointConfig::default()
            },
            traffic: TrafficConfig {
                arrival_probability_multiplier: 200.0,
            },
            ..Self::default()
        }
    }

    /// Returns the quiet-residential preset: a handful of wallboxes, half the arrivals.
    pub fn quiet_residential() -> Self {
        Self {
            charge_points: ChargePointConfig {
                count: 5,
                charging_power_kw: 3.7,
            },
            traffic: TrafficConfig {
                arrival_probability_multiplier: 50.0,
            },
            ..Self::default()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "fast_charging", "busy_depot", "quiet_residential"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "fast_charging" => Ok(Self::fast_charging()),
            "busy_depot" => Ok(Self::busy_depot()),
            "quiet_residential" => Ok(Self::quiet_residential()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("scenario", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.charge_points.count == 0 {
            errors.push(ConfigError::new("charge_points.count", "must be > 0"));
        }
        positive(
            &mut errors,
            "charge_points.charging_power_kw",
            self.charge_points.charging_power_kw,
        );
        positive(
            &mut errors,
            "vehicles.consumption_kwh_per_100km",
            self.vehicles.consumption_kwh_per_100km,
        );

        let multiplier = self.traffic.arrival_probability_multiplier;
        if !multiplier.is_finite() || multiplier < 0.0 {
            errors.push(ConfigError::new(
                "traffic.arrival_probability_multiplier",
                format!("must be a finite number >= 0, got {multiplier}"),
            ));
        }

        errors
    }

    /// Converts the scenario into run parameters.
    pub fn to_parameters(&self) -> SimulationParameters {
        SimulationParameters {
            num_charge_points: self.charge_points.count,
            arrival_probability_multiplier: self.traffic.arrival_probability_multiplier,
            car_consumption_kwh_per_100km: self.vehicles.consumption_kwh_per_100km,
            charging_power_kw: self.charge_points.charging_power_kw,
        }
    }
}

fn positive(errors: &mut Vec<ConfigError>, field: &str, value: f64) {
    if !value.is_finite() || value <= 0.0 {
        errors.push(ConfigError::new(
            field,
            format!("must be a finite number > 0, got {value}"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_preset_valid() {
        let cfg = ScenarioConfig::baseline();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "baseline should be valid: {errors:?}");
    }

    #[test]
    fn baseline_matches_service_defaults() {
        let params = ScenarioConfig::baseline().to_parameters();
        assert_eq!(params.num_charge_points, 20);
        assert_eq!(params.arrival_probability_multiplier, 100.0);
        assert_eq!(params.car_consumption_kwh_per_100km, 18.0);
        assert_eq!(params.charging_power_kw, 11.0);
    }

    #[test]
    fn from_preset_unknown() {
        let err = ScenarioConfig::from_preset("nonexistent");
        assert!(err.is_err());
        let e = err.unwrap_err();
        assert_eq!(e.field, "preset");
        assert!(e.message.contains("unknown preset"));
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[simulation]
seed = 99

[charge_points]
count = 12
charging_power_kw = 22.0

[vehicles]
consumption_kwh_per_100km = 20.0

[traffic]
arrival_probability_multiplier = 150.0
"#;
        let cfg = ScenarioConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().and_then(|c| c.simulation.seed), Some(99));
        assert_eq!(cfg.as_ref().map(|c| c.charge_points.count), Some(12));
        assert_eq!(
            cfg.as_ref().map(|c| c.traffic.arrival_probability_multiplier),
            Some(150.0)
        );
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[charge_points]
count = 4
bogus_field = true
"#;
        let result = ScenarioConfig::from_toml_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[charge_points]
count = 3
"#;
        let cfg = ScenarioConfig::from_toml_str(toml);
        assert!(cfg.is_ok());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.charge_points.count), Some(3));
        // power kept default
        assert_eq!(
            cfg.as_ref().map(|c| c.charge_points.charging_power_kw),
            Some(11.0)
        );
        assert_eq!(cfg.as_ref().and_then(|c| c.simulation.seed), None);
    }

    #[test]
    fn validation_collects_every_problem() {
        let mut cfg = ScenarioConfig::baseline();
        cfg.charge_points.count = 0;
        cfg.charge_points.charging_power_kw = 0.0;
        cfg.vehicles.consumption_kwh_per_100km = f64::NAN;
        cfg.traffic.arrival_probability_multiplier = -1.0;
        let fields: Vec<_> = cfg.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "charge_points.count",
                "charge_points.charging_power_kw",
                "vehicles.consumption_kwh_per_100km",
                "traffic.arrival_probability_multiplier",
            ]
        );
    }

    #[test]
    fn zero_multiplier_is_valid() {
        let mut cfg = ScenarioConfig::baseline();
        cfg.traffic.arrival_probability_multiplier = 0.0;
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn all_presets_are_valid() {
        for name in ScenarioConfig::PRESETS {
            let cfg = ScenarioConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
            let params = cfg.map(|c| c.to_parameters());
            assert!(params.is_ok_and(|p| p.validate().is_ok()));
        }
    }

    #[test]
    fn fast_charging_has_higher_power() {
        let base = ScenarioConfig::baseline();
        let fast = ScenarioConfig::fast_charging();
        assert!(fast.charge_points.charging_power_kw > base.charge_points.charging_power_kw);
        assert!(fast.charge_points.count < base.charge_points.count);
    }

    #[test]
    fn parameter_errors_map_to_toml_paths() {
        let err = ConfigError::from(ConfigurationError::NoChargePoints);
        assert_eq!(err.field, "charge_points.count");
        let err = ConfigError::from(ConfigurationError::EmptyDistribution);
        assert_eq!(err.field, "scenario");
    }
}
