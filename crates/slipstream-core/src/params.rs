//! Vehicle parameters: the immutable configuration of one simulated car.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Everything about a vehicle that does not change while it is simulated.
/// Validated once at spawn time; after that, no step can fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleParams {
    // --- Geometry ---
    /// Mass (kg).
    pub mass: f64,
    /// Wheel radius (m).
    pub wheel_radius: f64,
    /// Front-to-rear axle distance (m), used for wheel placement only.
    pub wheelbase: f64,
    /// Left-to-right wheel distance (m), used for wheel placement only.
    pub track_width: f64,

    // --- Engine and transmission ---
    /// Rev limit (RPM).
    pub max_rpm: f64,
    /// Torque at the peak of the curve (N·m).
    pub max_torque: f64,
    /// Revs at which torque peaks (RPM).
    pub peak_rpm: f64,
    /// Dead zone below which the engine produces no torque (RPM).
    pub null_rpm: f64,
    /// Nominal rev climb rate under full throttle (RPM/s).
    pub rpm_accel_rate: f64,
    /// Rev decay rate with the throttle released (RPM/s).
    pub rpm_decel_rate: f64,
    /// Per-gear ratios, index 0 = 1st gear.
    pub gear_ratios: Vec<f64>,
    /// Final drive ratio, multiplied into every gear.
    pub final_drive: f64,

    // --- Aerodynamics ---
    /// Drag coefficient (dimensionless).
    pub drag_coefficient: f64,
    /// Downforce coefficient magnitude (dimensionless). Applied as a
    /// vertical load; the sign convention lives in the force calculation.
    pub downforce_coefficient: f64,
    /// Frontal area (m²).
    pub frontal_area: f64,
    /// Air density (kg/m³).
    pub air_density: f64,

    // --- Tires and brakes ---
    /// Tire friction coefficient (dimensionless).
    pub tire_friction: f64,
    /// Brake force at full engagement (N).
    pub max_brake_force: f64,
    /// Brake engagement ramp rate (fraction per second).
    pub brake_ramp_rate: f64,
}

impl Default for VehicleParams {
    /// An F1-class single-seater.
    fn default() -> Self {
        Self {
            mass: 740.0,
            wheel_radius: 0.33,
            wheelbase: 3.7,
            track_width: 1.8,
            max_rpm: 15_000.0,
            max_torque: 500.0,
            peak_rpm: 11_000.0,
            null_rpm: 4_000.0,
            rpm_accel_rate: 3_000.0,
            rpm_decel_rate: 500.0,
            gear_ratios: vec![3.2, 2.5, 2.0, 1.7, 1.4, 1.2, 1.1, 1.0],
            final_drive: 3.5,
            drag_coefficient: 0.9,
            downforce_coefficient: 3.0,
            frontal_area: 1.5,
            air_density: 1.225,
            tire_friction: 1.5,
            max_brake_force: 15_000.0,
            brake_ramp_rate: 1.0,
        }
    }
}

impl VehicleParams {
    /// Number of gears.
    pub fn gear_count(&self) -> usize {
        self.gear_ratios.len()
    }

    /// Validate every parameter. Called once when a vehicle is spawned;
    /// rules out division by zero (wheel radius, gear ratio, final drive)
    /// structurally so the step pipeline never has to check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.mass > 0.0) {
            return Err(ConfigError::InvalidMass(self.mass));
        }
        if !(self.wheel_radius > 0.0) {
            return Err(ConfigError::InvalidWheelRadius(self.wheel_radius));
        }
        if self.gear_ratios.is_empty() {
            return Err(ConfigError::EmptyGearRatios);
        }
        for (i, &ratio) in self.gear_ratios.iter().enumerate() {
            if !(ratio > 0.0) {
                return Err(ConfigError::InvalidGearRatio {
                    gear: i + 1,
                    ratio,
                });
            }
        }
        if !(self.final_drive > 0.0) {
            return Err(ConfigError::InvalidFinalDrive(self.final_drive));
        }
        if !(0.0 <= self.null_rpm && self.null_rpm <= self.peak_rpm && self.peak_rpm < self.max_rpm)
        {
            return Err(ConfigError::InvalidRpmCurve {
                null_rpm: self.null_rpm,
                peak_rpm: self.peak_rpm,
                max_rpm: self.max_rpm,
            });
        }
        for (name, value) in [
            ("wheelbase", self.wheelbase),
            ("track width", self.track_width),
            ("rpm acceleration rate", self.rpm_accel_rate),
            ("rpm deceleration rate", self.rpm_decel_rate),
            ("drag coefficient", self.drag_coefficient),
            ("downforce coefficient", self.downforce_coefficient),
            ("frontal area", self.frontal_area),
            ("air density", self.air_density),
            ("tire friction", self.tire_friction),
            ("max brake force", self.max_brake_force),
            ("brake ramp rate", self.brake_ramp_rate),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::NegativeCoefficient { name, value });
            }
        }
        Ok(())
    }
}
