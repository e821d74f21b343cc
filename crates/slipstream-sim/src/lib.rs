//! Slipstream simulation engine.
//!
//! A headless, deterministic, fixed-step longitudinal vehicle simulator:
//! an RPM/torque engine model feeds a gear train, the resulting traction is
//! combined with drag, downforce-limited grip and a smoothed brake force,
//! and the total is integrated into velocity and position. No rendering, no
//! input handling, no timing; callers drive it one tick at a time.

pub mod engine;
pub mod systems;
pub mod world_setup;
