//! Motion integration: sum the longitudinal forces, apply Newton's second
//! law, and advance velocity and position with a single explicit Euler
//! pass. First-order and intentionally simple; stability comes from the
//! caller's small fixed dt, not from sub-stepping.

use hecs::World;

use slipstream_core::components::{Forces, Kinematics, WheelLayout};
use slipstream_core::params::VehicleParams;
use slipstream_core::types::Vec2;

/// Integrate every vehicle and refresh its wheel placement.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (params, forces, kinematics, wheels)) in world.query_mut::<(
        &VehicleParams,
        &Forces,
        &mut Kinematics,
        &mut WheelLayout,
    )>() {
        integrate(params, forces, kinematics, dt);
        wheels.positions = wheel_positions(params, kinematics.position);
    }
}

/// One Euler step: force → acceleration → velocity → position → speed,
/// with two floors at zero.
pub fn integrate(params: &VehicleParams, forces: &Forces, kinematics: &mut Kinematics, dt: f64) {
    let total_force = forces.traction + forces.drag + forces.brake;

    kinematics.acceleration.x = total_force / params.mass;
    kinematics.acceleration.y = 0.0;

    let prev_vx = kinematics.velocity.x;
    kinematics.velocity.x += kinematics.acceleration.x * dt;

    // A brake stops the car, it does not reverse it: if one step under
    // braking would flip the sign of the velocity, stop exactly at zero.
    if forces.brake != 0.0 && prev_vx != 0.0 && kinematics.velocity.x * prev_vx < 0.0 {
        kinematics.velocity.x = 0.0;
    }

    kinematics.position.x += kinematics.velocity.x * dt;
    kinematics.speed = kinematics.velocity.length();

    // No coasting backward: drag alone must never push a standing car into
    // reverse.
    if kinematics.velocity.x < 0.0 && forces.brake == 0.0 {
        kinematics.velocity.x = 0.0;
        kinematics.speed = 0.0;
    }
}

/// Place the four wheels (FL, FR, RL, RR) around the center of mass.
/// Orientation is ignored; the car never yaws in this model.
pub fn wheel_positions(params: &VehicleParams, center: Vec2) -> [Vec2; 4] {
    let half_wheelbase = params.wheelbase / 2.0;
    let half_track = params.track_width / 2.0;
    [
        Vec2::new(center.x + half_wheelbase, center.y + half_track),
        Vec2::new(center.x + half_wheelbase, center.y - half_track),
        Vec2::new(center.x - half_wheelbase, center.y + half_track),
        Vec2::new(center.x - half_wheelbase, center.y - half_track),
    ]
}
