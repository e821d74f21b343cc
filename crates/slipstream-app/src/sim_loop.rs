//! Stepping thread — runs the simulation engine at a fixed period and
//! publishes snapshots.
//!
//! The engine moves into the thread and moves back out at shutdown, so the
//! caller can read telemetry after the run. Commands arrive via `mpsc`;
//! the latest snapshot is stored in shared state for polling. The
//! presentation side never sees a half-stepped state: the mutex only ever
//! holds complete post-tick snapshots.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::info;

use slipstream_core::commands::DriverCommand;
use slipstream_core::state::SimSnapshot;
use slipstream_sim::engine::SimulationEngine;

use crate::state::SimLoopCommand;

/// Handle to a running stepping thread.
pub struct SimLoopHandle {
    command_tx: mpsc::Sender<SimLoopCommand>,
    latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
    join_handle: JoinHandle<SimulationEngine>,
}

impl SimLoopHandle {
    /// Forward a driver command to the engine. A send to a finished thread
    /// is dropped.
    pub fn send(&self, command: DriverCommand) {
        let _ = self.command_tx.send(SimLoopCommand::Driver(command));
    }

    /// Latest complete snapshot, if at least one tick has run.
    pub fn latest(&self) -> Option<SimSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// Stop the stepping thread and take the engine back.
    pub fn shutdown(self) -> SimulationEngine {
        let _ = self.command_tx.send(SimLoopCommand::Shutdown);
        self.join_handle
            .join()
            .expect("sim loop thread panicked")
    }
}

/// Spawn the stepping thread. `time_scale` stretches or compresses the
/// wall-clock pacing only; simulated dt is fixed inside the engine.
pub fn spawn_sim_loop(engine: SimulationEngine, time_scale: f64) -> SimLoopHandle {
    let (command_tx, command_rx) = mpsc::channel::<SimLoopCommand>();
    let latest_snapshot: Arc<Mutex<Option<SimSnapshot>>> = Arc::new(Mutex::new(None));

    let snapshot_slot = Arc::clone(&latest_snapshot);
    let join_handle = thread::Builder::new()
        .name("slipstream-sim-loop".into())
        .spawn(move || run_sim_loop(engine, command_rx, &snapshot_slot, time_scale))
        .expect("failed to spawn sim loop thread");

    SimLoopHandle {
        command_tx,
        latest_snapshot,
        join_handle,
    }
}

/// The stepping loop. Runs until Shutdown or channel disconnect, then
/// returns the engine to the joiner.
fn run_sim_loop(
    mut engine: SimulationEngine,
    command_rx: mpsc::Receiver<SimLoopCommand>,
    latest_snapshot: &Mutex<Option<SimSnapshot>>,
    time_scale: f64,
) -> SimulationEngine {
    let tick_duration = if time_scale > 0.001 {
        Duration::from_secs_f64(engine.dt()).div_f64(time_scale)
    } else {
        Duration::from_secs_f64(engine.dt())
    };
    let mut next_tick_time = Instant::now();

    info!(dt = engine.dt(), time_scale, "sim loop started");

    loop {
        // 1. Drain all pending commands so shifts and resets land at the
        //    tick boundary, never mid-step.
        loop {
            match command_rx.try_recv() {
                Ok(SimLoopCommand::Driver(command)) => engine.queue_command(command),
                Ok(SimLoopCommand::Shutdown) => return engine,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return engine,
            }
        }

        // 2. Advance one tick and publish the complete snapshot.
        let snapshot = engine.tick();
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 3. Sleep until the next deadline.
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind — reset to avoid a catch-up spiral.
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slipstream_core::params::VehicleParams;
    use slipstream_sim::engine::SimConfig;

    #[test]
    fn test_loop_publishes_snapshots_and_returns_engine() {
        let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
        let id = engine.spawn_vehicle(VehicleParams::default()).unwrap();

        // Run well past real time so a few ticks land quickly.
        let handle = spawn_sim_loop(engine, 100.0);

        let deadline = Instant::now() + Duration::from_secs(2);
        let snapshot = loop {
            if let Some(snapshot) = handle.latest() {
                break snapshot;
            }
            assert!(Instant::now() < deadline, "no snapshot within 2 s");
            thread::sleep(Duration::from_millis(5));
        };
        assert!(snapshot.vehicle(id).is_some());

        let engine = handle.shutdown();
        assert!(engine.time().tick >= snapshot.time.tick);
    }
}
