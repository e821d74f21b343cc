//! Slipstream driver shell.
//!
//! This crate wires the simulation engine to the outside world: a CLI, a
//! TOML config loader, the fixed-period stepping thread, and scripted
//! driver scenarios that stand in for live pedal/shifter input.

pub mod cli;
pub mod config;
pub mod scenario;
pub mod sim_loop;
pub mod state;

pub use slipstream_core as core;
