//! Brake engagement system.
//!
//! The pedal does not produce force instantly: a brake factor in [0, 1]
//! ramps toward 1 while the pedal is held and back toward 0 when released,
//! at the configured rate. The force derived from it is assembled with the
//! other longitudinal forces in the forces system.

use hecs::World;

use slipstream_core::components::{BrakeState, DriverControls};
use slipstream_core::params::VehicleParams;

/// Ramp every vehicle's brake factor toward its pedal state.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (params, controls, brake)) in
        world.query_mut::<(&VehicleParams, &DriverControls, &mut BrakeState)>()
    {
        update_brake_factor(params, brake, controls.brake, dt);
    }
}

/// One saturating ramp step on the brake factor.
pub fn update_brake_factor(params: &VehicleParams, brake: &mut BrakeState, pedal_on: bool, dt: f64) {
    if pedal_on {
        brake.factor = (brake.factor + params.brake_ramp_rate * dt).min(1.0);
    } else {
        brake.factor = (brake.factor - params.brake_ramp_rate * dt).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brake_factor_stays_in_unit_interval() {
        let params = VehicleParams::default();
        let mut brake = BrakeState::default();

        // Arbitrary pedal pattern with oversized steps.
        for (pedal, dt) in [
            (true, 0.5),
            (true, 5.0),
            (false, 0.2),
            (true, 0.01),
            (false, 100.0),
            (true, 3.0),
            (false, 0.0),
        ] {
            update_brake_factor(&params, &mut brake, pedal, dt);
            assert!(
                (0.0..=1.0).contains(&brake.factor),
                "factor escaped [0,1]: {}",
                brake.factor
            );
        }
    }

    #[test]
    fn test_brake_factor_saturates_at_one() {
        let params = VehicleParams::default();
        let mut brake = BrakeState::default();
        // Full engagement takes 1/brake_ramp_rate seconds.
        let steps = (1.0 / (params.brake_ramp_rate * 0.01)).ceil() as usize;
        for _ in 0..steps {
            update_brake_factor(&params, &mut brake, true, 0.01);
        }
        assert_eq!(brake.factor, 1.0);
    }

    #[test]
    fn test_brake_factor_releases_to_zero() {
        let params = VehicleParams::default();
        let mut brake = BrakeState { factor: 0.73 };
        for _ in 0..200 {
            update_brake_factor(&params, &mut brake, false, 0.01);
        }
        assert_eq!(brake.factor, 0.0);
    }
}
