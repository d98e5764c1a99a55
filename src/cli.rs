//! Command-line arguments.

#[cfg(feature = "api")]
use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;

use chargepoint_sim::config::ScenarioConfig;

/// Yearly charge-point load simulation.
///
/// Without `--scenario` or `--preset` the baseline preset is used.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Load scenario from a TOML file.
    #[clap(long, conflicts_with = "preset")]
    pub scenario: Option<PathBuf>,

    /// Use a built-in preset (baseline, fast_charging, busy_depot, quiet_residential).
    #[clap(long)]
    pub preset: Option<String>,

    /// Override the random seed.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Override the number of charge points.
    #[clap(long = "charge-points")]
    pub charge_points: Option<u32>,

    /// Override the arrival probability multiplier (percent).
    #[clap(long = "arrival-multiplier")]
    pub arrival_multiplier: Option<f64>,

    /// Override vehicle consumption (kWh per 100 km).
    #[clap(long)]
    pub consumption: Option<f64>,

    /// Override charging power per point (kW).
    #[clap(long = "charging-power")]
    pub charging_power: Option<f64>,

    /// Export the per-tick power series to CSV.
    #[clap(long = "series-out")]
    pub series_out: Option<PathBuf>,

    /// Export the charging session log to CSV.
    #[clap(long = "sessions-out")]
    pub sessions_out: Option<PathBuf>,

    /// Print the result as JSON instead of the text report.
    #[clap(long)]
    pub json: bool,

    /// Log filter directive, e.g. `debug`. Defaults to `RUST_LOG`, then `info`.
    #[clap(long = "log-level")]
    pub log_level: Option<String>,

    /// Start the REST API server instead of running once.
    #[cfg(feature = "api")]
    #[clap(long)]
    pub serve: bool,

    /// API bind address.
    #[cfg(feature = "api")]
    #[clap(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// API server port.
    #[cfg(feature = "api")]
    #[clap(long, env = "PORT", default_value_t = 4000)]
    pub port: u16,

    /// Wall-clock limit for one API run, in seconds.
    #[cfg(feature = "api")]
    #[clap(long = "run-timeout-secs", default_value_t = 30)]
    pub run_timeout_secs: u64,

    /// Largest station count one API request may simulate.
    #[cfg(feature = "api")]
    #[clap(long = "max-charge-points", env = "MAX_CHARGE_POINTS", default_value_t = 10_000)]
    pub max_charge_points: u32,
}

impl Args {
    /// Applies per-parameter overrides on top of a loaded scenario.
    pub fn apply_overrides(&self, scenario: &mut ScenarioConfig) {
        if let Some(seed) = self.seed {
            scenario.simulation.seed = Some(seed);
        }
        if let Some(count) = self.charge_points {
            scenario.charge_points.count = count;
        }
        if let Some(kw) = self.charging_power {
            scenario.charge_points.charging_power_kw = kw;
        }
        if let Some(consumption) = self.consumption {
            scenario.vehicles.consumption_kwh_per_100km = consumption;
        }
        if let Some(multiplier) = self.arrival_multiplier {
            scenario.traffic.arrival_probability_multiplier = multiplier;
        }
    }
}
