//! Core types and definitions for the Slipstream vehicle simulator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, telemetry, and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod error;
pub mod params;
pub mod state;
pub mod telemetry;
pub mod types;
