//! Discrete-time engine driving charge points through arrival and occupancy.

use tracing::debug;

use super::arrival::ArrivalCurve;
use super::clock::TickClock;
use super::demand::DemandDistribution;
use super::random::UniformSource;
use super::series::PowerDemandSeries;
use super::session::ChargingSession;
use super::station::StationState;
use super::types::{SimulationParameters, SimulationRun, TICK_HOURS, TOTAL_TICKS};

/// Ticks a station stays reserved to recharge `energy_kwh` at `charging_power_kw`.
///
/// Never less than one tick, so every charging event occupies its station and
/// contributes load.
///
/// # Examples
///
/// ```
/// use chargepoint_sim::sim::engine::ticks_needed;
///
/// // 5 km at 18 kWh/100 km on an 11 kW point
/// assert_eq!(ticks_needed(0.9, 11.0), 1);
/// assert_eq!(ticks_needed(36.0, 11.0), 14);
/// ```
pub fn ticks_needed(energy_kwh: f64, charging_power_kw: f64) -> usize {
    // NaN and negatives cast to 0, infinity saturates
    ((energy_kwh / (charging_power_kw * TICK_HOURS)).ceil() as usize).max(1)
}

/// Run-scoped simulation state: stations, power series, and event log.
///
/// Each engine owns its own state and random source, so independent runs
/// never share anything mutable. Parameters are expected to have passed
/// [`SimulationParameters::validate`]; the engine itself tolerates zero
/// stations and produces an all-zero series.
pub struct Engine<R: UniformSource> {
    params: SimulationParameters,
    arrivals: ArrivalCurve,
    demand: DemandDistribution,
    source: R,
    stations: Vec<StationState>,
    series: PowerDemandSeries,
    charging_events: u64,
    sessions: Vec<ChargingSession>,
}

impl<R: UniformSource> Engine<R> {
    /// Creates an engine with all stations free and an all-zero series.
    ///
    /// # Arguments
    ///
    /// * `params` - Run parameters
    /// * `arrivals` - Per-tick arrival probability (one day, wraps)
    /// * `demand` - Trip-distance distribution for arrivals
    /// * `source` - Uniform random source, consumed only by this run
    pub fn new(
        params: SimulationParameters,
        arrivals: ArrivalCurve,
        demand: DemandDistribution,
        source: R,
    ) -> Self {
        let stations = vec![StationState::new(); params.num_charge_points as usize];
        Self {
            params,
            arrivals,
            demand,
            source,
            stations,
            series: PowerDemandSeries::zeros(TOTAL_TICKS),
            charging_events: 0,
            sessions: Vec::new(),
        }
    }

    /// Creates an engine using the empirical arrival curve scaled by the
    /// parameters' multiplier and the empirical demand table.
    pub fn empirical(params: SimulationParameters, source: R) -> Self {
        let arrivals = ArrivalCurve::empirical(params.arrival_probability_multiplier);
        Self::new(params, arrivals, DemandDistribution::empirical(), source)
    }

    /// Simulates one tick, scanning stations in index order.
    ///
    /// Every free station gets a Bernoulli arrival draw; on success a second
    /// draw picks the trip distance. A zero distance leaves the station free
    /// and is not counted. The source is positioned on `(station, tick)`
    /// before the first draw, so keyed sources give each decision fixed values.
    ///
    /// # Returns
    ///
    /// The number of charging events started at `tick`.
    pub fn step(&mut self, tick: usize) -> usize {
        let probability = self.arrivals.probability_at(tick);
        let power_kw = self.params.charging_power_kw;
        let kwh_per_km = self.params.consumption_kwh_per_km();
        let mut started = 0;

        for (index, station) in self.stations.iter_mut().enumerate() {
            if !station.is_free(tick) {
                continue;
            }
            self.source.seek(index, tick);
            if !self.source.chance(probability) {
                continue;
            }

            let distance_km = self.demand.sample_km(&mut self.source);
            if distance_km <= 0.0 {
                continue;
            }

            let energy_kwh = distance_km * kwh_per_km;
            let ticks = ticks_needed(energy_kwh, power_kw);
            let reserved = station.reserve(tick, ticks);
            debug_assert!(reserved, "free station {index} refused tick {tick}");
            self.series.add_load_kw(tick, ticks, power_kw);
            self.charging_events += 1;
            self.sessions.push(ChargingSession {
                station: index,
                start_tick: tick,
                ticks,
                distance_km,
                energy_kwh,
            });
            started += 1;
        }

        started
    }

    /// Runs every tick of the year and hands back the completed state.
    pub fn run(mut self) -> SimulationRun {
        debug!(
            stations = self.stations.len(),
            ticks = TOTAL_TICKS,
            multiplier = self.params.arrival_probability_multiplier,
            "simulation started"
        );

        for tick in TickClock::new(TOTAL_TICKS) {
            self.step(tick);
        }

        debug!(
            charging_events = self.charging_events,
            "simulation finished"
        );

        SimulationRun {
            params: self.params,
            series: self.series,
            charging_events: self.charging_events,
            sessions: self.sessions,
        }
    }

    /// Charging events counted so far.
    pub fn charging_events(&self) -> u64 {
        self.charging_events
    }

    /// Station states, by index.
    pub fn stations(&self) -> &[StationState] {
        &self.stations
    }

    /// Power series accumulated so far.
    pub fn series(&self) -> &PowerDemandSeries {
        &self.series
    }

    /// Run parameters.
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }
}
