//! ECS components for hecs entities.
//!
//! Components are plain data structs with no physics in them.
//! The step logic lives in the sim crate's systems.

use serde::{Deserialize, Serialize};

use crate::types::Vec2;

/// Marks an entity as a simulated car.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Car;

/// Driver inputs, written by commands and read by the step systems.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DriverControls {
    /// Throttle pedal held.
    pub throttle: bool,
    /// Brake pedal held.
    pub brake: bool,
    /// Steering input. Accepted and carried, never used (no lateral
    /// dynamics).
    pub steering: f64,
}

/// Engine state. `torque` is always the torque-curve value for the current
/// `rpm`; nothing else ever writes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Engine {
    /// Crankshaft speed (RPM), in [0, max_rpm].
    pub rpm: f64,
    /// Output torque (N·m), >= 0.
    pub torque: f64,
}

/// Gear train state. `wheel_rpm`, `wheel_torque` and `traction_force` are
/// derived from the engine through the current gear factor; they are
/// recomputed after every rpm change and every shift, never mutated
/// independently. `traction_force` here is the raw (unclamped) value; the
/// grip limit is applied when forces are assembled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transmission {
    /// Current gear, 1-based.
    pub gear: usize,
    /// Wheel speed (RPM).
    pub wheel_rpm: f64,
    /// Torque at the wheel (N·m).
    pub wheel_torque: f64,
    /// Raw traction force at the contact patch (N).
    pub traction_force: f64,
}

impl Default for Transmission {
    fn default() -> Self {
        Self {
            gear: 1,
            wheel_rpm: 0.0,
            wheel_torque: 0.0,
            traction_force: 0.0,
        }
    }
}

/// Smoothed brake engagement, in [0, 1]. Models pad engagement time rather
/// than an instantaneous force.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BrakeState {
    pub factor: f64,
}

/// Longitudinal force terms assembled each step (N). `traction` is the
/// throttle-gated, grip-clamped value entering the force sum; `downforce`
/// is a vertical load magnitude and is not summed longitudinally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Forces {
    pub traction: f64,
    pub drag: f64,
    pub downforce: f64,
    pub brake: f64,
}

/// Translational state of the center of mass. Only x is driven by the
/// integrator; y rides along at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Velocity magnitude (m/s), >= 0, floored together with velocity.x.
    pub speed: f64,
}

/// Wheel positions around the center of mass (FL, FR, RL, RR), recomputed
/// after every step and reset. Placement only, no per-wheel dynamics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelLayout {
    pub positions: [Vec2; 4],
}
