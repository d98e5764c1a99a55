//! Aggregate charging power over the simulated year.

use serde::Serialize;

use super::types::{TICK_HOURS, TICKS_PER_DAY};

/// Charging power demand per tick (kW).
///
/// Values are only ever increased while a run is in progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PowerDemandSeries {
    values_kw: Vec<f64>,
}

impl PowerDemandSeries {
    /// Creates an all-zero series of `ticks` entries.
    pub fn zeros(ticks: usize) -> Self {
        Self {
            values_kw: vec![0.0; ticks],
        }
    }

    /// Adds `power_kw` to every tick in `[start, start + ticks)`, clipped to
    /// the end of the series.
    pub fn add_load_kw(&mut self, start: usize, ticks: usize, power_kw: f64) {
        let end = start.saturating_add(ticks).min(self.values_kw.len());
        if start >= end {
            return;
        }
        for value in &mut self.values_kw[start..end] {
            *value += power_kw;
        }
    }

    /// Power at `tick`, or `0.0` past the end.
    pub fn power_at_kw(&self, tick: usize) -> f64 {
        self.values_kw.get(tick).copied().unwrap_or(0.0)
    }

    /// Number of ticks covered.
    pub fn len(&self) -> usize {
        self.values_kw.len()
    }

    /// Returns `true` if the series covers no ticks.
    pub fn is_empty(&self) -> bool {
        self.values_kw.is_empty()
    }

    /// All values in tick order.
    pub fn values_kw(&self) -> &[f64] {
        &self.values_kw
    }

    /// Energy delivered over the whole series (kWh).
    pub fn total_energy_kwh(&self) -> f64 {
        self.values_kw.iter().sum::<f64>() * TICK_HOURS
    }

    /// Highest aggregate power, `0.0` for an empty series.
    pub fn peak_kw(&self) -> f64 {
        self.values_kw.iter().copied().fold(0.0, f64::max)
    }

    /// The 96 values of day `day`, zero-padded if the series is shorter.
    pub fn day_profile_kw(&self, day: usize) -> Vec<f64> {
        let start = day * TICKS_PER_DAY;
        (start..start + TICKS_PER_DAY)
            .map(|tick| self.power_at_kw(tick))
            .collect()
    }
}
