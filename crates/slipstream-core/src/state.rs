//! Simulation snapshot: the complete visible state published after each
//! tick. The stepping side writes it, the presentation side only reads it,
//! so a reader always sees a fully consistent post-step state.

use serde::{Deserialize, Serialize};

use crate::types::{SimTime, Vec2, VehicleId};

/// Complete simulation state after one tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    /// Per-vehicle views, sorted by id.
    pub vehicles: Vec<VehicleView>,
}

/// Everything the display needs about one vehicle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleView {
    pub id: VehicleId,

    // Engine and transmission
    pub gear: usize,
    pub engine_rpm: f64,
    pub engine_torque: f64,
    pub wheel_rpm: f64,
    pub wheel_torque: f64,

    // Motion
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Speed (m/s).
    pub speed: f64,

    // Forces (N); traction is the grip-clamped value in the force sum.
    pub traction_force: f64,
    pub drag_force: f64,
    pub down_force: f64,
    pub brake_force: f64,
    /// Brake engagement in [0, 1].
    pub brake_factor: f64,

    // Wheel placement (FL, FR, RL, RR)
    pub wheel_positions: [Vec2; 4],

    // Control echo
    pub throttle: bool,
    pub brake: bool,
}

impl SimSnapshot {
    /// Look up one vehicle's view by id.
    pub fn vehicle(&self, id: VehicleId) -> Option<&VehicleView> {
        self.vehicles.iter().find(|v| v.id == id)
    }
}
