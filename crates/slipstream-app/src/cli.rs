//! Command-line interface for the slipstream binary.

use std::path::PathBuf;

use clap::Parser;

use crate::scenario::Scenario;

/// Slipstream: a longitudinal vehicle-dynamics simulator.
///
/// Runs a scripted driver against the fixed-step physics engine and logs
/// the resulting state at display rate.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML config file with [sim] and [vehicle] tables.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Scripted driver scenario to run.
    #[arg(long, value_enum, default_value_t = Scenario::Launch)]
    pub scenario: Scenario,

    /// Simulated duration in seconds.
    #[arg(short, long, default_value_t = 20.0)]
    pub duration: f64,

    /// Wall-clock pacing multiplier (2.0 = twice real time). Does not
    /// change the simulated step size.
    #[arg(long, default_value_t = 1.0)]
    pub time_scale: f64,

    /// Write the recorded telemetry series to this JSON file on exit.
    #[arg(long)]
    pub telemetry_out: Option<PathBuf>,
}
