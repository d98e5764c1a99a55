/// One charging event: a station reserved from `start_tick` for `ticks` ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargingSession {
    /// Index of the reserved station.
    pub station: usize,
    /// Tick the vehicle arrived (inclusive).
    pub start_tick: usize,
    /// Number of ticks reserved (always >= 1).
    pub ticks: usize,
    /// Sampled trip distance (km, > 0).
    pub distance_km: f64,
    /// Energy recharged (kWh).
    pub energy_kwh: f64,
}

impl ChargingSession {
    /// First tick after the session (exclusive end).
    pub fn end_tick(&self) -> usize {
        self.start_tick.saturating_add(self.ticks)
    }

    /// Returns `true` when `tick` falls within `[start_tick, end_tick)`.
    pub fn is_active(&self, tick: usize) -> bool {
        tick >= self.start_tick && tick < self.end_tick()
    }
}
