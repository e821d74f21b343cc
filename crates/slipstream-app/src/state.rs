//! Shared state between the presentation side and the stepping thread.

use slipstream_core::commands::DriverCommand;

/// Commands sent from the input/presentation side to the stepping thread.
#[derive(Debug)]
pub enum SimLoopCommand {
    /// A driver command to forward to the simulation engine.
    Driver(DriverCommand),
    /// Shut down the stepping thread gracefully.
    Shutdown,
}
