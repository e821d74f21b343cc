//! Telemetry recording system.
//!
//! Appends one sample every `interval_ticks` to vehicles that carry a
//! `TelemetryLog`, up to the log's cap. Vehicles spawned without a log are
//! skipped entirely; recording is opt-in.

use hecs::World;

use slipstream_core::components::{Engine, Forces, Kinematics, Transmission};
use slipstream_core::telemetry::{TelemetryLog, TelemetrySample};
use slipstream_core::types::SimTime;

/// Record a sample for every telemetry-carrying vehicle, if due this tick.
pub fn run(world: &mut World, time: &SimTime) {
    for (_entity, (engine, transmission, kinematics, forces, log)) in world.query_mut::<(
        &Engine,
        &Transmission,
        &Kinematics,
        &Forces,
        &mut TelemetryLog,
    )>() {
        if time.tick == 0 || !time.tick.is_multiple_of(log.interval_ticks as u64) {
            continue;
        }
        if log.samples.len() >= log.max_samples {
            continue;
        }
        log.samples.push(TelemetrySample {
            tick: time.tick,
            elapsed_secs: time.elapsed_secs,
            position_x: kinematics.position.x,
            speed: kinematics.speed,
            engine_rpm: engine.rpm,
            gear: transmission.gear,
            drag_force: forces.drag.abs(),
        });
    }
}
