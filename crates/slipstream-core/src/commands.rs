//! Driver commands sent from the input side to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, so a shift
//! is never applied in the middle of a recompute.

use serde::{Deserialize, Serialize};

use crate::types::VehicleId;

/// All possible driver actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DriverCommand {
    /// Replace the pedal/steering state of one vehicle.
    SetControls {
        vehicle: VehicleId,
        throttle: bool,
        brake: bool,
        steering: f64,
    },
    /// Shift to the next higher gear. No-op in top gear.
    ShiftUp { vehicle: VehicleId },
    /// Shift to the next lower gear. Refused when the resynchronized engine
    /// speed would exceed the rev limit.
    ShiftDown { vehicle: VehicleId },
    /// Reinitialize the vehicle: gear 1, zero revs, zero motion.
    Reset { vehicle: VehicleId },
}
