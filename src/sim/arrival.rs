//! Per-tick arrival probability curve derived from hourly traffic shares.

use super::types::{HOURS_PER_DAY, TICKS_PER_DAY, TICKS_PER_HOUR};

/// Empirical share of daily arrivals per hour of day, in percent.
pub const HOURLY_ARRIVAL_PERCENT: [f64; HOURS_PER_DAY] = [
    0.94, 0.94, 0.94, 0.94, 0.94, 0.94, 0.94, 0.94, // 00:00-07:59
    2.83, 2.83, // 08:00-09:59
    5.66, 5.66, 5.66, // 10:00-12:59
    7.55, 7.55, 7.55, // 13:00-15:59
    10.38, 10.38, 10.38, // 16:00-18:59
    4.72, 4.72, 4.72, // 19:00-21:59
    0.94, 0.94, // 22:00-23:59
];

/// Arrival probability for each tick of a day, repeated for every day.
///
/// # Examples
///
/// ```
/// use chargepoint_sim::sim::arrival::ArrivalCurve;
///
/// let curve = ArrivalCurve::empirical(100.0);
/// // 10.38 % at 16:00, split over four ticks
/// assert!((curve.probability_at(16 * 4) - 0.1038 / 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ArrivalCurve {
    per_tick: Vec<f64>,
}

impl ArrivalCurve {
    /// Builds the curve from hourly percentages scaled by `multiplier` percent.
    ///
    /// Each hour's probability `(percent * multiplier / 100) / 100` is divided
    /// evenly across its ticks.
    pub fn from_hourly_percent(hourly_percent: &[f64; HOURS_PER_DAY], multiplier: f64) -> Self {
        let per_tick = hourly_percent
            .iter()
            .map(|percent| (percent * (multiplier / 100.0)) / 100.0)
            .flat_map(|hourly| std::iter::repeat_n(hourly / TICKS_PER_HOUR as f64, TICKS_PER_HOUR))
            .collect();
        Self { per_tick }
    }

    /// Builds the curve from the empirical traffic profile.
    pub fn empirical(multiplier: f64) -> Self {
        Self::from_hourly_percent(&HOURLY_ARRIVAL_PERCENT, multiplier)
    }

    /// Same probability at every tick.
    pub fn constant(probability: f64) -> Self {
        Self {
            per_tick: vec![probability; TICKS_PER_DAY],
        }
    }

    /// Arrival probability at simulation tick `tick` (wraps daily).
    pub fn probability_at(&self, tick: usize) -> f64 {
        self.per_tick[tick % TICKS_PER_DAY]
    }

    /// The 96 per-tick probabilities of one day.
    pub fn per_tick(&self) -> &[f64] {
        &self.per_tick
    }

    /// Expected arrivals per free station per day.
    pub fn expected_daily_arrivals(&self) -> f64 {
        self.per_tick.iter().sum()
    }
}
