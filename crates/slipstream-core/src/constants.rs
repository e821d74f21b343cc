//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). 100 Hz gives the 0.01 s step the explicit
/// Euler scheme is tuned for.
pub const TICK_RATE: u32 = 100;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Standard gravity (m/s²), used by the grip-limit calculation.
pub const GRAVITY: f64 = 9.81;

// --- Presentation ---

/// Snapshot poll rate for the presentation side (Hz). The display loop runs
/// slower than the stepping loop and only ever reads complete snapshots.
pub const DISPLAY_RATE: u32 = 30;

// --- Telemetry ---

/// Default telemetry sampling interval in ticks (one sample every N ticks).
pub const TELEMETRY_SAMPLE_INTERVAL: u32 = 10;

/// Maximum samples retained per vehicle (one hour at the default interval).
pub const MAX_TELEMETRY_SAMPLES: usize = 36_000;
