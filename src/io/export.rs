//! CSV export for the power demand series and the session log.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::clock::{day_of, time_of_day_label};
use crate::sim::series::PowerDemandSeries;
use crate::sim::session::ChargingSession;

const SERIES_HEADER: [&str; 4] = ["tick", "day", "time_of_day", "power_kw"];

const SESSIONS_HEADER: [&str; 5] = ["station", "start_tick", "end_tick", "distance_km", "energy_kwh"];

/// Exports the power series to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_series_csv(series: &PowerDemandSeries, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_series_csv(series, io::BufWriter::new(file))
}

/// Writes one row per tick: tick index, day, `HH:MM` label, and aggregate power.
///
/// Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_series_csv(series: &PowerDemandSeries, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(SERIES_HEADER)?;

    for (tick, kw) in series.values_kw().iter().enumerate() {
        wtr.write_record(&[
            tick.to_string(),
            day_of(tick).to_string(),
            time_of_day_label(tick),
            format!("{kw:.4}"),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Exports the session log to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_sessions_csv(sessions: &[ChargingSession], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_sessions_csv(sessions, io::BufWriter::new(file))
}

/// Writes one row per charging session; `end_tick` is exclusive.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_sessions_csv(sessions: &[ChargingSession], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(SESSIONS_HEADER)?;

    for s in sessions {
        wtr.write_record(&[
            s.station.to_string(),
            s.start_tick.to_string(),
            s.end_tick().to_string(),
            format!("{:.1}", s.distance_km),
            format!("{:.4}", s.energy_kwh),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
