//! Stochastic charge-point simulation over one year of 15-minute ticks.

/// Per-tick arrival probabilities.
pub mod arrival;
/// Tick clock and calendar helpers.
pub mod clock;
/// Trip-distance distribution.
pub mod demand;
pub mod engine;
pub mod random;
pub mod sampler;
pub mod series;
/// Charging-session records.
pub mod session;
pub mod station;
pub mod stats;
pub mod types;

use chrono::Utc;
use tracing::info;

use crate::error::ConfigurationError;

use self::engine::Engine;
use self::random::{SeededSource, UniformSource};
use self::stats::{SimulationResult, StatisticsAggregator};
use self::types::{SimulationParameters, SimulationRun};

/// Validates `params` and runs one year, returning the raw run.
///
/// # Errors
///
/// Returns a `ConfigurationError` for degenerate parameters; nothing is
/// simulated in that case.
pub fn run<R: UniformSource>(
    params: &SimulationParameters,
    source: R,
) -> Result<SimulationRun, ConfigurationError> {
    params.validate()?;
    Ok(Engine::empirical(params.clone(), source).run())
}

/// Validates `params`, runs one year, and aggregates the result.
///
/// The exemplary-day stamp is the wall-clock time of aggregation.
///
/// # Errors
///
/// Returns a `ConfigurationError` for degenerate parameters.
pub fn simulate<R: UniformSource>(
    params: &SimulationParameters,
    source: R,
) -> Result<SimulationResult, ConfigurationError> {
    let run = run(params, source)?;
    let result = StatisticsAggregator.aggregate_run(&run, Utc::now());
    info!(
        charge_points = params.num_charge_points,
        events = result.charging_events_per_year,
        energy_kwh = result.total_energy_kwh,
        peak_kw = result.actual_max_power,
        "simulation complete"
    );
    Ok(result)
}

/// [`simulate`] with a `StdRng` seeded from `seed`.
///
/// # Errors
///
/// Returns a `ConfigurationError` for degenerate parameters.
pub fn simulate_seeded(
    params: &SimulationParameters,
    seed: u64,
) -> Result<SimulationResult, ConfigurationError> {
    simulate(params, SeededSource::new(seed))
}
