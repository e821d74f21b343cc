//! Telemetry time series: an optional per-vehicle history of samples for
//! offline plotting. The simulation appends; plotting is a pure consumer.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_TELEMETRY_SAMPLES, TELEMETRY_SAMPLE_INTERVAL};

/// One recorded instant of a vehicle's state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySample {
    pub tick: u64,
    pub elapsed_secs: f64,
    pub position_x: f64,
    /// Speed (m/s).
    pub speed: f64,
    pub engine_rpm: f64,
    pub gear: usize,
    /// Drag magnitude (N).
    pub drag_force: f64,
}

/// Sample series attached to a vehicle entity. Recording stops at
/// `max_samples`; the oldest samples are the ones kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryLog {
    pub samples: Vec<TelemetrySample>,
    /// One sample every this many ticks.
    pub interval_ticks: u32,
    pub max_samples: usize,
}

impl Default for TelemetryLog {
    fn default() -> Self {
        Self {
            samples: Vec::new(),
            interval_ticks: TELEMETRY_SAMPLE_INTERVAL,
            max_samples: MAX_TELEMETRY_SAMPLES,
        }
    }
}
