//! Config file loading: a TOML file with `[sim]` and `[vehicle]` tables.
//! Every field has a default, so a partial file (or none at all) works.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use slipstream_core::constants::DT;
use slipstream_core::params::VehicleParams;

/// Errors surfaced while loading a config file. Parameter-value validation
/// happens later, when the vehicle is spawned.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level application config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimSettings,
    pub vehicle: VehicleParams,
}

/// Stepping settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    /// Fixed simulation step (seconds).
    pub dt: f64,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self { dt: DT }
    }
}

/// Load a config file from disk.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigFileError> {
    let text = fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}
