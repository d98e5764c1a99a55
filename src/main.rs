//! Charge-point simulator entry point: CLI wiring and scenario-driven runs.

mod cli;

use std::process;

use chrono::Utc;
use clap::Parser;
use tracing::info;

use chargepoint_sim::config::ScenarioConfig;
use chargepoint_sim::io::export::{export_series_csv, export_sessions_csv};
use chargepoint_sim::sim::random::SeededSource;
use chargepoint_sim::sim::stats::StatisticsAggregator;
use chargepoint_sim::telemetry::init_tracing;

use crate::cli::Args;

/// Prints `message` to stderr and exits with status 1.
fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {message}");
    process::exit(1);
}

/// Loads the scenario: `--scenario` takes priority, then `--preset`, then baseline.
fn load_scenario(args: &Args) -> ScenarioConfig {
    let loaded = if let Some(ref path) = args.scenario {
        ScenarioConfig::from_toml_file(path)
    } else if let Some(ref name) = args.preset {
        ScenarioConfig::from_preset(name)
    } else {
        Ok(ScenarioConfig::baseline())
    };

    let mut scenario = loaded.unwrap_or_else(|e| fail(e));
    args.apply_overrides(&mut scenario);

    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }
    scenario
}

#[cfg(feature = "api")]
fn serve(args: &Args) {
    use std::net::SocketAddr;
    use std::sync::Arc;
    use std::time::Duration;

    let state = Arc::new(chargepoint_sim::api::AppState {
        run_timeout: Duration::from_secs(args.run_timeout_secs),
        max_charge_points: args.max_charge_points,
    });
    let addr = SocketAddr::new(args.host, args.port);
    let rt = tokio::runtime::Runtime::new()
        .unwrap_or_else(|e| fail(format!("failed to create tokio runtime: {e}")));
    if let Err(e) = rt.block_on(chargepoint_sim::api::serve(state, addr)) {
        fail(format!("server error on {addr}: {e}"));
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    #[cfg(feature = "api")]
    if args.serve {
        serve(&args);
        return;
    }

    let scenario = load_scenario(&args);
    let params = scenario.to_parameters();
    let source = match scenario.simulation.seed {
        Some(seed) => SeededSource::new(seed),
        None => SeededSource::from_random_seed(),
    };
    info!(seed = source.seed(), charge_points = params.num_charge_points, "starting run");

    let run = chargepoint_sim::sim::run(&params, source).unwrap_or_else(|e| fail(e));
    let result = StatisticsAggregator.aggregate_run(&run, Utc::now());

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => fail(format!("failed to encode result: {e}")),
        }
    } else {
        println!("{result}");
    }

    if let Some(ref path) = args.series_out {
        if let Err(e) = export_series_csv(&run.series, path) {
            fail(format!("failed to write CSV: {e}"));
        }
        info!(path = %path.display(), "power series written");
    }

    if let Some(ref path) = args.sessions_out {
        if let Err(e) = export_sessions_csv(&run.sessions, path) {
            fail(format!("failed to write CSV: {e}"));
        }
        info!(path = %path.display(), sessions = run.sessions.len(), "sessions written");
    }
}
