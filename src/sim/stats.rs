//! Reduction of a completed run into the result record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::series::PowerDemandSeries;
use super::types::{SimulationParameters, SimulationRun};

/// Summary statistics of one simulated year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Energy delivered over the year (kWh).
    #[serde(rename = "totalEnergyKWh")]
    pub total_energy_kwh: f64,
    /// Power if every station charged at once (kW).
    #[serde(rename = "theoreticalMaxPower")]
    pub theoretical_max_power: f64,
    /// Highest observed aggregate power (kW).
    #[serde(rename = "actualMaxPower")]
    pub actual_max_power: f64,
    /// `actual_max_power / theoretical_max_power`, in `[0, 1]`.
    #[serde(rename = "concurrencyFactor")]
    pub concurrency_factor: f64,
    /// Power per tick of the first simulated day (96 values).
    #[serde(rename = "chargingValues")]
    pub charging_values: Vec<f64>,
    /// Wall-clock time the result was aggregated.
    #[serde(rename = "exemplaryDay")]
    pub exemplary_day: DateTime<Utc>,
    #[serde(rename = "chargingEventsPerYear")]
    pub charging_events_per_year: u64,
    #[serde(rename = "chargingEventsPerMonth")]
    pub charging_events_per_month: u64,
    #[serde(rename = "chargingEventsPerWeek")]
    pub charging_events_per_week: u64,
    #[serde(rename = "chargingEventsPerDay")]
    pub charging_events_per_day: u64,
}

/// Stateless reducer from power series and event count to [`SimulationResult`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StatisticsAggregator;

impl StatisticsAggregator {
    /// Computes all statistics.
    ///
    /// # Arguments
    ///
    /// * `series` - Completed power demand series
    /// * `charging_events` - Number of charging events in the year
    /// * `params` - Parameters the run used
    /// * `captured_at` - Timestamp recorded as the exemplary day
    pub fn aggregate(
        &self,
        series: &PowerDemandSeries,
        charging_events: u64,
        params: &SimulationParameters,
        captured_at: DateTime<Utc>,
    ) -> SimulationResult {
        let theoretical_max_power = params.theoretical_max_power_kw();
        let actual_max_power = series.peak_kw();

        // repeated addition can overshoot N * P by an ulp
        let concurrency_factor = if theoretical_max_power > 0.0 {
            (actual_max_power / theoretical_max_power).clamp(0.0, 1.0)
        } else {
            0.0
        };

        SimulationResult {
            total_energy_kwh: series.total_energy_kwh(),
            theoretical_max_power,
            actual_max_power,
            concurrency_factor,
            charging_values: series.day_profile_kw(0),
            exemplary_day: captured_at,
            charging_events_per_year: charging_events,
            charging_events_per_month: per_period(charging_events, 12),
            charging_events_per_week: per_period(charging_events, 52),
            charging_events_per_day: per_period(charging_events, 365),
        }
    }

    /// Aggregates a completed run.
    pub fn aggregate_run(&self, run: &SimulationRun, captured_at: DateTime<Utc>) -> SimulationResult {
        self.aggregate(&run.series, run.charging_events, &run.params, captured_at)
    }
}

fn per_period(per_year: u64, periods: u32) -> u64 {
    (per_year as f64 / f64::from(periods)).round() as u64
}

impl SimulationResult {
    /// Tick of the first simulated day with the highest power.
    pub fn exemplary_peak_tick(&self) -> usize {
        self.charging_values
            .iter()
            .enumerate()
            .fold((0, 0.0), |best, (tick, &kw)| if kw > best.1 { (tick, kw) } else { best })
            .0
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Charging Report ---")?;
        writeln!(f, "Total energy:          {:.2} kWh", self.total_energy_kwh)?;
        writeln!(f, "Theoretical max power: {:.2} kW", self.theoretical_max_power)?;
        writeln!(f, "Actual max power:      {:.2} kW", self.actual_max_power)?;
        writeln!(f, "Concurrency factor:    {:.2}", self.concurrency_factor)?;
        writeln!(
            f,
            "Charging events:       {} / year, {} / month, {} / week, {} / day",
            self.charging_events_per_year,
            self.charging_events_per_month,
            self.charging_events_per_week,
            self.charging_events_per_day
        )?;
        write!(
            f,
            "Exemplary day peak:    {:.2} kW at {} (captured {})",
            self.charging_values
                .get(self.exemplary_peak_tick())
                .copied()
                .unwrap_or(0.0),
            super::clock::time_of_day_label(self.exemplary_peak_tick()),
            self.exemplary_day.to_rfc3339()
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::sim::types::TOTAL_TICKS;

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_default()
    }

    #[test]
    fn energy_and_peak() {
        let mut series = PowerDemandSeries::zeros(TOTAL_TICKS);
        series.add_load_kw(0, 4, 11.0);
        series.add_load_kw(2, 1, 11.0);
        let params = SimulationParameters::new(10);
        let result = StatisticsAggregator.aggregate(&series, 2, &params, stamp());

        // (11 * 4 + 11) kW * 0.25 h
        assert_eq!(result.total_energy_kwh, 13.75);
        assert_eq!(result.theoretical_max_power, 110.0);
        assert_eq!(result.actual_max_power, 22.0);
        assert_eq!(result.concurrency_factor, 0.2);
        assert_eq!(result.charging_values.len(), 96);
        assert_eq!(result.charging_values[2], 22.0);
        assert_eq!(result.exemplary_day, stamp());
    }

    #[test]
    fn zero_stations_has_no_nan() {
        let series = PowerDemandSeries::zeros(TOTAL_TICKS);
        let params = SimulationParameters::new(0);
        let result = StatisticsAggregator.aggregate(&series, 0, &params, stamp());
        assert_eq!(result.total_energy_kwh, 0.0);
        assert_eq!(result.actual_max_power, 0.0);
        assert_eq!(result.concurrency_factor, 0.0);
    }

    #[test]
    fn empty_series_still_has_full_day() {
        let series = PowerDemandSeries::zeros(0);
        let params = SimulationParameters::new(1);
        let result = StatisticsAggregator.aggregate(&series, 0, &params, stamp());
        assert_eq!(result.charging_values, vec![0.0; 96]);
        assert_eq!(result.actual_max_power, 0.0);
    }

    #[test]
    fn period_counts_round() {
        let series = PowerDemandSeries::zeros(1);
        let params = SimulationParameters::new(1);
        let result = StatisticsAggregator.aggregate(&series, 5_000, &params, stamp());
        assert_eq!(result.charging_events_per_year, 5_000);
        assert_eq!(result.charging_events_per_month, 417);
        assert_eq!(result.charging_events_per_week, 96);
        assert_eq!(result.charging_events_per_day, 14);

        let few = StatisticsAggregator.aggregate(&series, 100, &params, stamp());
        assert_eq!(few.charging_events_per_day, 0);
        assert_eq!(few.charging_events_per_week, 2);
    }

    #[test]
    fn json_uses_boundary_names() {
        let series = PowerDemandSeries::zeros(TOTAL_TICKS);
        let params = SimulationParameters::new(2);
        let result = StatisticsAggregator.aggregate(&series, 0, &params, stamp());
        let json = serde_json::to_value(&result).expect("serializable");
        for key in [
            "totalEnergyKWh",
            "theoreticalMaxPower",
            "actualMaxPower",
            "concurrencyFactor",
            "chargingValues",
            "exemplaryDay",
            "chargingEventsPerYear",
            "chargingEventsPerMonth",
            "chargingEventsPerWeek",
            "chargingEventsPerDay",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn report_display_does_not_panic() {
        let mut series = PowerDemandSeries::zeros(TOTAL_TICKS);
        series.add_load_kw(70, 2, 11.0);
        let params = SimulationParameters::new(2);
        let result = StatisticsAggregator.aggregate(&series, 1, &params, stamp());
        assert_eq!(result.exemplary_peak_tick(), 70);
        let s = format!("{result}");
        assert!(s.contains("17:30"));
    }
}
