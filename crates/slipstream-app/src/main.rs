//! slipstream: run a scripted driver against the vehicle simulator.
//!
//! The stepping thread advances the physics at a fixed period; this main
//! thread is the presentation side: it polls complete snapshots at display
//! rate, logs them, and feeds the scenario's commands back in.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::process;
use std::thread;
use std::time::Duration;

use clap::Parser;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use slipstream_core::constants::DISPLAY_RATE;
use slipstream_core::error::ConfigError;
use slipstream_core::telemetry::{TelemetryLog, TelemetrySample};
use slipstream_core::types::VehicleId;
use slipstream_sim::engine::{SimConfig, SimulationEngine};

use slipstream_app::cli::Cli;
use slipstream_app::config::{self, AppConfig, ConfigFileError};
use slipstream_app::sim_loop;

#[derive(Debug, Error)]
enum AppError {
    #[error("config error: {0}")]
    ConfigFile(#[from] ConfigFileError),
    #[error("invalid simulation config: {0}")]
    Sim(#[from] ConfigError),
    #[error("telemetry export failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("telemetry serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    tracing_subscriber::fmt().compact().init();

    if let Err(e) = run(Cli::parse()) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => AppConfig::default(),
    };

    let mut engine = SimulationEngine::new(SimConfig { dt: config.sim.dt })?;
    let vehicle = if cli.telemetry_out.is_some() {
        engine.spawn_vehicle_with_telemetry(config.vehicle.clone(), TelemetryLog::default())?
    } else {
        engine.spawn_vehicle(config.vehicle.clone())?
    };

    info!(
        scenario = ?cli.scenario,
        duration = cli.duration,
        dt = config.sim.dt,
        "starting run"
    );

    let handle = sim_loop::spawn_sim_loop(engine, cli.time_scale);
    let poll_interval = Duration::from_secs_f64(1.0 / DISPLAY_RATE as f64);
    let mut polls: u64 = 0;

    loop {
        thread::sleep(poll_interval);
        let Some(snapshot) = handle.latest() else {
            continue;
        };

        for command in cli.scenario.drive(&snapshot, vehicle) {
            handle.send(command);
        }

        // Log at a calmer cadence than we poll.
        if polls.is_multiple_of(15) {
            if let Some(view) = snapshot.vehicle(vehicle) {
                info!(
                    elapsed = snapshot.time.elapsed_secs,
                    gear = view.gear,
                    rpm = view.engine_rpm,
                    speed_kmh = view.speed * 3.6,
                    position_m = view.position.x,
                    "state"
                );
            }
        }
        polls += 1;

        if snapshot.time.elapsed_secs >= cli.duration {
            break;
        }
    }

    let engine = handle.shutdown();
    info!(ticks = engine.time().tick, "run complete");

    if let Some(path) = &cli.telemetry_out {
        export_telemetry(&engine, path)?;
        info!(path = %path.display(), "telemetry written");
    }

    Ok(())
}

/// One exported series per telemetry-carrying vehicle.
#[derive(Serialize)]
struct TelemetryExport<'a> {
    vehicle: u32,
    samples: &'a [TelemetrySample],
}

fn export_telemetry(engine: &SimulationEngine, path: &Path) -> Result<(), AppError> {
    let mut query = engine.world().query::<(&VehicleId, &TelemetryLog)>();
    let exports: Vec<TelemetryExport> = query
        .iter()
        .map(|(_, (id, log))| TelemetryExport {
            vehicle: id.0,
            samples: &log.samples,
        })
        .collect();

    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &exports)?;
    Ok(())
}
