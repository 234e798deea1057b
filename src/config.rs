use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::dynamics::state::SimConfig;
use crate::error::ConfigError;
use crate::sim::MetricsOptions;
use crate::vehicle::PhysicalConstants;

// ---------------------------------------------------------------------------
// Run configuration (TOML)
// ---------------------------------------------------------------------------

/// Everything one run needs. Every table is optional; missing values fall
/// back to the Fly a Rocket! defaults.
///
/// ```toml
/// name = "Fly a Rocket!"
///
/// [rocket]
/// thrust = 2501.8
/// burn_time = 6.09
///
/// [sim]
/// dt = 0.01
/// max_time = 500.0
/// solver = { method = "dormand-prince", rtol = 1e-3, atol = 1e-6 }
///
/// [metrics]
/// apogee = "full-series"
/// density = "power-law"
///
/// [output]
/// csv = "trajectory.csv"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub name: String,
    pub rocket: PhysicalConstants,
    pub sim: SimConfig,
    pub metrics: MetricsOptions,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub csv: Option<PathBuf>,
    pub json: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            name: "Fly a Rocket!".into(),
            rocket: PhysicalConstants::default(),
            sim: SimConfig::default(),
            metrics: MetricsOptions::default(),
            output: OutputConfig::default(),
        }
    }
}

impl RunConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: RunConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!("loaded run config '{}' from {}", config.name, path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rocket.validate()?;
        self.sim.validate()?;
        Ok(())
    }
}
