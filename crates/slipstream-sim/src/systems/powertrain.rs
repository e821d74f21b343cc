//! Powertrain system: engine RPM dynamics, the torque curve, and the gear
//! train that maps engine speed/torque to wheel speed/torque and raw
//! traction force.
//!
//! The RPM trajectory is an open-loop ramp: revs climb or decay at
//! configured rates regardless of load, and torque is read off the curve as
//! a consequence of RPM, not a cause. Deliberate simplification: there is
//! no inertia-based engine model here.

use hecs::World;

use slipstream_core::components::{DriverControls, Engine, Transmission};
use slipstream_core::params::VehicleParams;

/// Advance every vehicle's engine and gear train by one step.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (params, controls, engine, transmission)) in world.query_mut::<(
        &VehicleParams,
        &DriverControls,
        &mut Engine,
        &mut Transmission,
    )>() {
        advance_rpm(params, engine, controls.throttle, dt);
        recompute(params, engine, transmission);
    }
}

/// One Euler step on engine RPM, clamped to [0, max_rpm].
pub fn advance_rpm(params: &VehicleParams, engine: &mut Engine, throttle: bool, dt: f64) {
    if throttle {
        engine.rpm = (engine.rpm + dt * sigma_factor(params, engine.rpm)).min(params.max_rpm);
    } else {
        engine.rpm = (engine.rpm - dt * params.rpm_decel_rate).max(0.0);
    }
}

/// Rev-range-dependent climb rate: half the nominal rate in the bottom and
/// top thirds of the range (reduced pull at very low and very high revs).
/// The boundaries themselves take the full rate (strict inequalities).
fn sigma_factor(params: &VehicleParams, rpm: f64) -> f64 {
    let third = params.max_rpm / 3.0;
    if (rpm > 0.0 && rpm < third) || (rpm > 2.0 * third && rpm < params.max_rpm) {
        0.5 * params.rpm_accel_rate
    } else {
        params.rpm_accel_rate
    }
}

/// Three-segment torque curve: dead zone below `null_rpm`, linear ramp to
/// `max_torque` at `peak_rpm`, then a linear falloff to 60% of max at the
/// rev limit. The jump at the dead-zone boundary is part of the model.
pub fn torque_curve(params: &VehicleParams, rpm: f64) -> f64 {
    if rpm < params.null_rpm {
        0.0
    } else if rpm <= params.peak_rpm {
        params.max_torque * (rpm / params.peak_rpm)
    } else {
        let drop_factor =
            1.0 - 0.4 * (rpm - params.peak_rpm) / (params.max_rpm - params.peak_rpm);
        params.max_torque * drop_factor
    }
}

/// Total drive ratio for a 1-based gear index.
fn gear_factor(params: &VehicleParams, gear: usize) -> f64 {
    params.gear_ratios[gear - 1] * params.final_drive
}

/// Rederive torque and all wheel-side values from the current engine RPM
/// and gear. This is the only writer of those fields; after any rpm change
/// or shift, `wheel_rpm * gear_factor == engine_rpm` holds.
pub fn recompute(params: &VehicleParams, engine: &mut Engine, transmission: &mut Transmission) {
    engine.torque = torque_curve(params, engine.rpm);
    let factor = gear_factor(params, transmission.gear);
    transmission.wheel_rpm = engine.rpm / factor;
    transmission.wheel_torque = engine.torque * factor;
    transmission.traction_force = transmission.wheel_torque / params.wheel_radius;
}

/// Shift to the next higher gear, holding wheel speed constant across the
/// ratio change (the shift itself does not alter vehicle speed). No-op in
/// top gear.
pub fn shift_up(params: &VehicleParams, engine: &mut Engine, transmission: &mut Transmission) {
    if transmission.gear < params.gear_count() {
        transmission.gear += 1;
        engine.rpm = transmission.wheel_rpm * gear_factor(params, transmission.gear);
        recompute(params, engine, transmission);
    }
}

/// Shift to the next lower gear, unless the resynchronized engine speed
/// would exceed the rev limit; then the shift is refused outright and the
/// state is left untouched. Returns whether the shift was applied.
///
/// The asymmetry with `shift_up` (only downshifts carry an over-rev guard)
/// is intentional: an upshift always lowers engine speed.
pub fn shift_down(
    params: &VehicleParams,
    engine: &mut Engine,
    transmission: &mut Transmission,
) -> bool {
    if transmission.gear > 1 {
        let candidate_rpm = transmission.wheel_rpm * gear_factor(params, transmission.gear - 1);
        if candidate_rpm <= params.max_rpm {
            transmission.gear -= 1;
            engine.rpm = candidate_rpm;
            recompute(params, engine, transmission);
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rig() -> (VehicleParams, Engine, Transmission) {
        (
            VehicleParams::default(),
            Engine::default(),
            Transmission::default(),
        )
    }

    #[test]
    fn test_torque_curve_dead_zone() {
        let params = VehicleParams::default();
        assert_eq!(torque_curve(&params, 0.0), 0.0);
        assert_eq!(torque_curve(&params, params.null_rpm - 1.0), 0.0);
    }

    #[test]
    fn test_torque_curve_peak() {
        let params = VehicleParams::default();
        assert_relative_eq!(torque_curve(&params, params.peak_rpm), params.max_torque);
    }

    #[test]
    fn test_torque_curve_falls_to_60_percent_at_limit() {
        let params = VehicleParams::default();
        assert_relative_eq!(
            torque_curve(&params, params.max_rpm),
            0.6 * params.max_torque
        );
    }

    #[test]
    fn test_torque_curve_non_negative_everywhere() {
        let params = VehicleParams::default();
        let mut rpm = 0.0;
        while rpm <= params.max_rpm {
            assert!(torque_curve(&params, rpm) >= 0.0, "negative torque at {rpm}");
            rpm += 50.0;
        }
    }

    #[test]
    fn test_torque_curve_non_increasing_past_peak() {
        let params = VehicleParams::default();
        let mut previous = torque_curve(&params, params.peak_rpm);
        let mut rpm = params.peak_rpm + 50.0;
        while rpm <= params.max_rpm {
            let torque = torque_curve(&params, rpm);
            assert!(torque <= previous, "torque rose past peak at {rpm}");
            previous = torque;
            rpm += 50.0;
        }
        // Continuous at the peak from above.
        assert_relative_eq!(
            torque_curve(&params, params.peak_rpm + 1e-6),
            params.max_torque,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_sigma_factor_rev_ranges() {
        let params = VehicleParams::default();
        let full = params.rpm_accel_rate;

        // Bottom and top thirds pull at half rate.
        assert_eq!(sigma_factor(&params, 2_000.0), 0.5 * full);
        assert_eq!(sigma_factor(&params, 12_000.0), 0.5 * full);
        // Middle third pulls at full rate.
        assert_eq!(sigma_factor(&params, 7_000.0), full);
        // Boundaries take the full rate (strict inequalities).
        assert_eq!(sigma_factor(&params, 0.0), full);
        assert_eq!(sigma_factor(&params, params.max_rpm / 3.0), full);
        assert_eq!(sigma_factor(&params, params.max_rpm / 3.0 * 2.0), full);
        assert_eq!(sigma_factor(&params, params.max_rpm), full);
    }

    #[test]
    fn test_advance_rpm_clamps_to_limits() {
        let (params, mut engine, _) = rig();

        engine.rpm = params.max_rpm - 1.0;
        advance_rpm(&params, &mut engine, true, 10.0);
        assert_eq!(engine.rpm, params.max_rpm);

        engine.rpm = 1.0;
        advance_rpm(&params, &mut engine, false, 10.0);
        assert_eq!(engine.rpm, 0.0);
    }

    #[test]
    fn test_recompute_holds_gear_train_invariant() {
        let (params, mut engine, mut transmission) = rig();
        for gear in 1..=params.gear_count() {
            transmission.gear = gear;
            for rpm in [0.0, 3_000.0, 8_000.0, 15_000.0] {
                engine.rpm = rpm;
                recompute(&params, &mut engine, &mut transmission);
                let factor = params.gear_ratios[gear - 1] * params.final_drive;
                assert_relative_eq!(
                    transmission.wheel_rpm * factor,
                    engine.rpm,
                    epsilon = 1e-9
                );
                assert_relative_eq!(
                    transmission.traction_force * params.wheel_radius,
                    engine.torque * factor,
                    epsilon = 1e-9
                );
            }
        }
    }

    #[test]
    fn test_shift_up_noop_in_top_gear() {
        let (params, mut engine, mut transmission) = rig();
        transmission.gear = params.gear_count();
        engine.rpm = 9_000.0;
        recompute(&params, &mut engine, &mut transmission);

        let before = (engine, transmission);
        shift_up(&params, &mut engine, &mut transmission);
        assert_eq!((engine, transmission), before);
    }

    #[test]
    fn test_shift_round_trip_restores_engine_rpm() {
        let (params, mut engine, mut transmission) = rig();
        transmission.gear = 3;
        engine.rpm = 9_000.0;
        recompute(&params, &mut engine, &mut transmission);

        shift_up(&params, &mut engine, &mut transmission);
        assert_eq!(transmission.gear, 4);
        assert!(engine.rpm < 9_000.0);

        assert!(shift_down(&params, &mut engine, &mut transmission));
        assert_eq!(transmission.gear, 3);
        assert_relative_eq!(engine.rpm, 9_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_shift_down_over_rev_guard_is_exact_noop() {
        let (params, mut engine, mut transmission) = rig();
        // 2nd gear near the limiter: 1st would over-rev (14000 * 3.2/2.5).
        transmission.gear = 2;
        engine.rpm = 14_000.0;
        recompute(&params, &mut engine, &mut transmission);

        let before = (engine, transmission);
        assert!(!shift_down(&params, &mut engine, &mut transmission));
        assert_eq!((engine, transmission), before);
    }

    #[test]
    fn test_shift_down_never_exceeds_rev_limit() {
        let (params, mut engine, mut transmission) = rig();
        for gear in 2..=params.gear_count() {
            for rpm in [1_000.0, 7_500.0, 13_000.0, 15_000.0] {
                transmission.gear = gear;
                engine.rpm = rpm;
                recompute(&params, &mut engine, &mut transmission);
                shift_down(&params, &mut engine, &mut transmission);
                assert!(engine.rpm <= params.max_rpm);
            }
        }
    }
}
