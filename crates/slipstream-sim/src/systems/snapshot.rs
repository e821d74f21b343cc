//! Snapshot system: queries the ECS world and builds a complete
//! SimSnapshot.
//!
//! This system is read-only — it never modifies the world. It runs after
//! all step systems, so every view it builds is a fully consistent
//! post-step state.

use hecs::World;

use slipstream_core::components::{
    BrakeState, DriverControls, Engine, Forces, Kinematics, Transmission, WheelLayout,
};
use slipstream_core::state::{SimSnapshot, VehicleView};
use slipstream_core::types::{SimTime, VehicleId};

/// Build a complete SimSnapshot from the current world state.
pub fn build_snapshot(world: &World, time: &SimTime) -> SimSnapshot {
    let mut vehicles: Vec<VehicleView> = world
        .query::<(
            &VehicleId,
            &DriverControls,
            &Engine,
            &Transmission,
            &BrakeState,
            &Forces,
            &Kinematics,
            &WheelLayout,
        )>()
        .iter()
        .map(
            |(_, (id, controls, engine, transmission, brake, forces, kinematics, wheels))| {
                VehicleView {
                    id: *id,
                    gear: transmission.gear,
                    engine_rpm: engine.rpm,
                    engine_torque: engine.torque,
                    wheel_rpm: transmission.wheel_rpm,
                    wheel_torque: transmission.wheel_torque,
                    position: kinematics.position,
                    velocity: kinematics.velocity,
                    acceleration: kinematics.acceleration,
                    speed: kinematics.speed,
                    traction_force: forces.traction,
                    drag_force: forces.drag,
                    down_force: forces.downforce,
                    brake_force: forces.brake,
                    brake_factor: brake.factor,
                    wheel_positions: wheels.positions,
                    throttle: controls.throttle,
                    brake: controls.brake,
                }
            },
        )
        .collect();

    vehicles.sort_by_key(|v| v.id);

    SimSnapshot {
        time: *time,
        vehicles,
    }
}
