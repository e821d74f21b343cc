//! Scripted driver scenarios.
//!
//! The simulator core takes pedal booleans and shift commands; in an
//! interactive build those come from a keyboard. Here a small script reads
//! the latest snapshot and decides what the driver does next, which keeps
//! runs reproducible and the shell free of terminal input handling.

use clap::ValueEnum;

use slipstream_core::commands::DriverCommand;
use slipstream_core::state::SimSnapshot;
use slipstream_core::types::VehicleId;

/// Engine speed at which the scripted driver grabs the next gear.
const UPSHIFT_RPM: f64 = 13_500.0;

/// Available driver scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Full throttle from rest, short-shifting near the limiter.
    Launch,
    /// Accelerate hard, then brake to a standstill.
    BrakeTest,
    /// Accelerate, then release everything and coast.
    CoastDown,
}

impl Scenario {
    /// Decide the driver's inputs for this instant. Called once per
    /// presentation poll; commands are idempotent, so re-issuing the same
    /// controls is harmless.
    pub fn drive(&self, snapshot: &SimSnapshot, vehicle: VehicleId) -> Vec<DriverCommand> {
        let Some(view) = snapshot.vehicle(vehicle) else {
            return Vec::new();
        };
        let elapsed = snapshot.time.elapsed_secs;
        let mut commands = Vec::new();

        let (throttle, brake) = match self {
            Scenario::Launch => (true, false),
            Scenario::BrakeTest => {
                if elapsed < 8.0 {
                    (true, false)
                } else {
                    (false, true)
                }
            }
            Scenario::CoastDown => {
                if elapsed < 8.0 {
                    (true, false)
                } else {
                    (false, false)
                }
            }
        };

        commands.push(DriverCommand::SetControls {
            vehicle,
            throttle,
            brake,
            steering: 0.0,
        });

        if throttle && view.engine_rpm > UPSHIFT_RPM {
            commands.push(DriverCommand::ShiftUp { vehicle });
        }

        commands
    }
}
