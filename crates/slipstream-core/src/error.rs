//! Configuration error taxonomy.
//!
//! All validation happens when parameters are loaded, never per step: once a
//! `SimulationEngine` is constructed, every tick is total and infallible.

use thiserror::Error;

/// Rejected configuration, raised at construction/load time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),
    #[error("vehicle mass must be positive, got {0}")]
    InvalidMass(f64),
    #[error("wheel radius must be positive, got {0}")]
    InvalidWheelRadius(f64),
    #[error("gear ratio table is empty")]
    EmptyGearRatios,
    #[error("gear ratio for gear {gear} must be positive, got {ratio}")]
    InvalidGearRatio { gear: usize, ratio: f64 },
    #[error("final drive ratio must be positive, got {0}")]
    InvalidFinalDrive(f64),
    #[error("rpm curve requires 0 <= null rpm <= peak rpm < max rpm, got null={null_rpm} peak={peak_rpm} max={max_rpm}")]
    InvalidRpmCurve {
        null_rpm: f64,
        peak_rpm: f64,
        max_rpm: f64,
    },
    #[error("{name} must be non-negative, got {value}")]
    NegativeCoefficient { name: &'static str, value: f64 },
}
