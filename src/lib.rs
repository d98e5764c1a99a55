//! Yearly stochastic simulation of electric-vehicle charge points.
//!
//! A run steps a fleet of identical charge points through 35,040
//! fifteen-minute ticks. Vehicles arrive by an hourly probability curve,
//! draw a trip distance, and occupy their station until the energy for that
//! distance is recharged. The aggregate power series is reduced to energy,
//! peak, concurrency, and event-rate statistics.

pub mod config;
pub mod error;
pub mod io;
/// Simulation engine, distributions, and statistics.
pub mod sim;
pub mod telemetry;

#[cfg(feature = "api")]
pub mod api;
