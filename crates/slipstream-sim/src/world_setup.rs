//! Entity spawn factories and reset for the simulation world.
//!
//! Creates vehicle entities with their full component bundle; the engine
//! assigns ids and validates parameters before calling in here.

use hecs::{Entity, World};

use slipstream_core::components::{
    BrakeState, Car, DriverControls, Engine, Forces, Kinematics, Transmission, WheelLayout,
};
use slipstream_core::params::VehicleParams;
use slipstream_core::telemetry::TelemetryLog;
use slipstream_core::types::VehicleId;

use crate::systems::motion;

/// Spawn a vehicle at the origin: gear 1, engine off, at rest.
pub fn spawn_vehicle(world: &mut World, id: VehicleId, params: VehicleParams) -> Entity {
    let kinematics = Kinematics::default();
    let wheels = WheelLayout {
        positions: motion::wheel_positions(&params, kinematics.position),
    };

    world.spawn((
        Car,
        id,
        params,
        DriverControls::default(),
        Engine::default(),
        Transmission::default(),
        BrakeState::default(),
        Forces::default(),
        kinematics,
        wheels,
    ))
}

/// Spawn a vehicle that also records telemetry.
pub fn spawn_vehicle_with_telemetry(
    world: &mut World,
    id: VehicleId,
    params: VehicleParams,
    log: TelemetryLog,
) -> Entity {
    let entity = spawn_vehicle(world, id, params);
    // The bundle above is already at hecs' practical width; attach the log
    // separately.
    world
        .insert_one(entity, log)
        .expect("entity spawned a line above");
    entity
}

/// Reinitialize a vehicle in place: gear 1, zero revs, zero motion, brake
/// released, wheel geometry recomputed. Telemetry, if any, is left intact.
pub fn reset_vehicle(world: &mut World, entity: Entity) {
    if let Ok((controls, engine, transmission, brake, forces)) = world.query_one_mut::<(
        &mut DriverControls,
        &mut Engine,
        &mut Transmission,
        &mut BrakeState,
        &mut Forces,
    )>(entity)
    {
        *controls = DriverControls::default();
        *engine = Engine::default();
        *transmission = Transmission::default();
        *brake = BrakeState::default();
        *forces = Forces::default();
    }

    if let Ok((params, kinematics, wheels)) =
        world.query_one_mut::<(&VehicleParams, &mut Kinematics, &mut WheelLayout)>(entity)
    {
        *kinematics = Kinematics::default();
        wheels.positions = motion::wheel_positions(params, kinematics.position);
    }
}
