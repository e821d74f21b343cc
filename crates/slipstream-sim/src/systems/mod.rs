//! Step systems, run in a fixed order each tick:
//! powertrain → brakes → forces → motion → telemetry, then snapshot.

pub mod brakes;
pub mod forces;
pub mod motion;
pub mod powertrain;
pub mod snapshot;
pub mod telemetry;
