//! Shared test fixtures for integration tests.

use chargepoint_sim::sim::random::UniformSource;
use chargepoint_sim::sim::types::SimulationParameters;

/// Seed used wherever a test needs a reproducible run.
pub const SEED: u64 = 42;

/// Default parameters: 20 points, 100 %, 18 kWh/100 km, 11 kW.
pub fn default_params() -> SimulationParameters {
    SimulationParameters::new(20)
}

/// Default parameters with `count` charge points.
pub fn params_with_points(count: u32) -> SimulationParameters {
    SimulationParameters::new(count)
}

/// Uniform source that always returns the same value.
pub struct ConstantSource(pub f64);

impl UniformSource for ConstantSource {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}
