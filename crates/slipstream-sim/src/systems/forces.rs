//! Force assembly: aerodynamic drag, downforce, the grip-limited traction
//! force, and the smoothed brake force. Pure recomputation; nothing here
//! integrates anything.

use hecs::World;

use slipstream_core::components::{BrakeState, DriverControls, Forces, Kinematics, Transmission};
use slipstream_core::constants::GRAVITY;
use slipstream_core::params::VehicleParams;

/// Rebuild every vehicle's force terms from the current state.
pub fn run(world: &mut World) {
    for (_entity, (params, controls, transmission, brake, kinematics, forces)) in world.query_mut::<(
        &VehicleParams,
        &DriverControls,
        &Transmission,
        &BrakeState,
        &Kinematics,
        &mut Forces,
    )>() {
        let vx = kinematics.velocity.x;

        forces.drag = drag_force(params, vx);
        forces.downforce = down_force(params, kinematics.speed);
        forces.traction = if controls.throttle {
            transmission
                .traction_force
                .min(traction_limit(params, forces.downforce))
        } else {
            0.0
        };
        forces.brake = brake_force(params, brake.factor, vx);
    }
}

/// Air resistance, always opposing the direction of motion:
/// F = -0.5 * rho * Cd * A * v * |v|.
pub fn drag_force(params: &VehicleParams, vx: f64) -> f64 {
    -0.5 * params.air_density * params.drag_coefficient * params.frontal_area * vx * vx.abs()
}

/// Aerodynamic load pressing the car onto the road (magnitude):
/// F = 0.5 * rho * |Cl| * A * v². Vertical only: it never enters the
/// longitudinal sum, but it raises the grip limit below.
pub fn down_force(params: &VehicleParams, speed: f64) -> f64 {
    0.5 * params.air_density * params.downforce_coefficient.abs() * params.frontal_area * speed
        * speed
}

/// Tire grip saturation: the wheels cannot transmit more than
/// mu * (weight + downforce). Throttle beyond that is wasted, not stored.
fn traction_limit(params: &VehicleParams, downforce: f64) -> f64 {
    params.tire_friction * (params.mass * GRAVITY + downforce)
}

/// Brake force opposing the current velocity direction; zero at rest, so a
/// standing car feels no brake push.
fn brake_force(params: &VehicleParams, factor: f64, vx: f64) -> f64 {
    if vx == 0.0 {
        0.0
    } else {
        -vx.signum() * factor * params.max_brake_force
    }
}
