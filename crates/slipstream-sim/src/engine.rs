//! Simulation engine — the core of the simulator.
//!
//! `SimulationEngine` owns the hecs ECS world, processes driver commands,
//! runs the step systems in order, and produces `SimSnapshot`s. Completely
//! headless and deterministic: same spawns plus same commands give the same
//! snapshots, byte for byte.

use std::collections::VecDeque;

use hecs::{Entity, World};
use tracing::debug;

use slipstream_core::commands::DriverCommand;
use slipstream_core::components::{DriverControls, Engine, Transmission};
use slipstream_core::constants::DT;
use slipstream_core::error::ConfigError;
use slipstream_core::params::VehicleParams;
use slipstream_core::state::SimSnapshot;
use slipstream_core::telemetry::TelemetryLog;
use slipstream_core::types::{SimTime, VehicleId};

use crate::systems;
use crate::systems::powertrain;
use crate::world_setup;

/// Configuration for a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Fixed step size in seconds. Must be positive and finite; the Euler
    /// scheme is tuned for small steps (reference: 0.01).
    pub dt: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { dt: DT }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    dt: f64,
    next_vehicle_id: u32,
    command_queue: VecDeque<DriverCommand>,
}

impl SimulationEngine {
    /// Create a new engine. A non-positive or non-finite time step is
    /// rejected here; after construction, stepping is total.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        if !config.dt.is_finite() || config.dt <= 0.0 {
            return Err(ConfigError::InvalidTimeStep(config.dt));
        }
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            dt: config.dt,
            next_vehicle_id: 0,
            command_queue: VecDeque::new(),
        })
    }

    /// Add a vehicle to the world. Parameters are validated here, once;
    /// a zero wheel radius or gear ratio can never reach the step systems.
    pub fn spawn_vehicle(&mut self, params: VehicleParams) -> Result<VehicleId, ConfigError> {
        params.validate()?;
        let id = self.allocate_id();
        world_setup::spawn_vehicle(&mut self.world, id, params);
        debug!(vehicle = id.0, "vehicle spawned");
        Ok(id)
    }

    /// Add a vehicle that records telemetry samples as it runs.
    pub fn spawn_vehicle_with_telemetry(
        &mut self,
        params: VehicleParams,
        log: TelemetryLog,
    ) -> Result<VehicleId, ConfigError> {
        params.validate()?;
        let id = self.allocate_id();
        world_setup::spawn_vehicle_with_telemetry(&mut self.world, id, params, log);
        debug!(vehicle = id.0, "vehicle spawned with telemetry");
        Ok(id)
    }

    /// Queue a driver command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: DriverCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = DriverCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one fixed step and return the resulting
    /// snapshot. Commands are drained first, so shifts and resets always
    /// land between full steps, never inside the recompute chain.
    pub fn tick(&mut self) -> SimSnapshot {
        self.process_commands();
        self.run_systems();
        self.time.advance(self.dt);
        systems::telemetry::run(&mut self.world, &self.time);
        systems::snapshot::build_snapshot(&self.world, &self.time)
    }

    /// Rebuild the current snapshot without stepping.
    pub fn snapshot(&self) -> SimSnapshot {
        systems::snapshot::build_snapshot(&self.world, &self.time)
    }

    /// Current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// The fixed step size (seconds).
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that need to stage a state (e.g. a
    /// car already at speed) without simulating its history.
    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn allocate_id(&mut self) -> VehicleId {
        let id = VehicleId(self.next_vehicle_id);
        self.next_vehicle_id += 1;
        id
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single driver command.
    fn handle_command(&mut self, command: DriverCommand) {
        match command {
            DriverCommand::SetControls {
                vehicle,
                throttle,
                brake,
                steering,
            } => {
                for (_entity, (id, controls)) in
                    self.world.query_mut::<(&VehicleId, &mut DriverControls)>()
                {
                    if *id == vehicle {
                        controls.throttle = throttle;
                        controls.brake = brake;
                        controls.steering = steering;
                    }
                }
            }
            DriverCommand::ShiftUp { vehicle } => {
                if let Some(entity) = self.find_vehicle(vehicle) {
                    if let Ok((params, engine, transmission)) = self
                        .world
                        .query_one_mut::<(&VehicleParams, &mut Engine, &mut Transmission)>(entity)
                    {
                        powertrain::shift_up(params, engine, transmission);
                        debug!(vehicle = vehicle.0, gear = transmission.gear, "shift up");
                    }
                }
            }
            DriverCommand::ShiftDown { vehicle } => {
                if let Some(entity) = self.find_vehicle(vehicle) {
                    if let Ok((params, engine, transmission)) = self
                        .world
                        .query_one_mut::<(&VehicleParams, &mut Engine, &mut Transmission)>(entity)
                    {
                        let applied = powertrain::shift_down(params, engine, transmission);
                        if applied {
                            debug!(vehicle = vehicle.0, gear = transmission.gear, "shift down");
                        } else {
                            debug!(vehicle = vehicle.0, "shift down refused (over-rev guard)");
                        }
                    }
                }
            }
            DriverCommand::Reset { vehicle } => {
                if let Some(entity) = self.find_vehicle(vehicle) {
                    world_setup::reset_vehicle(&mut self.world, entity);
                    debug!(vehicle = vehicle.0, "vehicle reset");
                }
            }
        }
    }

    /// Find a vehicle entity by its id.
    fn find_vehicle(&self, vehicle: VehicleId) -> Option<Entity> {
        self.world
            .query::<&VehicleId>()
            .iter()
            .find(|(_, id)| **id == vehicle)
            .map(|(entity, _)| entity)
    }

    /// Run the step systems in their fixed order.
    fn run_systems(&mut self) {
        // 1. Engine revs, torque curve, gear train
        systems::powertrain::run(&mut self.world, self.dt);
        // 2. Brake engagement ramp
        systems::brakes::run(&mut self.world, self.dt);
        // 3. Drag, downforce, grip clamp, brake force
        systems::forces::run(&mut self.world);
        // 4. Euler integration + wheel placement
        systems::motion::run(&mut self.world, self.dt);
    }
}
