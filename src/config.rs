//! Scheduler configuration.
//!
//! The fleet size is the only tunable. It is read from JSON, may be
//! overridden through the `DELIVERY_SCHEDULE_VEHICLES` environment
//! variable, and defaults to [`DEFAULT_NUM_VEHICLES`].

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fleet size used when nothing else is configured.
pub const DEFAULT_NUM_VEHICLES: usize = 30;

/// Environment variable that overrides the configured fleet size.
pub const VEHICLES_ENV: &str = "DELIVERY_SCHEDULE_VEHICLES";

/// Errors raised while loading or checking a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("fleet must have at least one vehicle")]
    NoVehicles,

    #[error("invalid value {value:?} for {name}: expected a positive integer")]
    InvalidEnv { name: &'static str, value: String },
}

/// Scheduler settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Number of identical vehicles available.
    pub num_vehicles: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            num_vehicles: DEFAULT_NUM_VEHICLES,
        }
    }
}

impl SchedulerConfig {
    /// Creates a configuration with the given fleet size.
    pub fn new(num_vehicles: usize) -> Self {
        Self { num_vehicles }
    }

    /// Sets the fleet size.
    pub fn with_num_vehicles(mut self, num_vehicles: usize) -> Self {
        self.num_vehicles = num_vehicles;
        self
    }

    /// Parses a configuration from JSON. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Applies `DELIVERY_SCHEDULE_VEHICLES` if it is set.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        match env::var(VEHICLES_ENV) {
            Ok(value) => self.with_vehicles_override(&value),
            Err(_) => Ok(self),
        }
    }

    fn with_vehicles_override(mut self, value: &str) -> Result<Self, ConfigError> {
        self.num_vehicles = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
            name: VEHICLES_ENV,
            value: value.to_string(),
        })?;
        self.validate()?;
        Ok(self)
    }

    /// Rejects a fleet without vehicles.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_vehicles == 0 {
            return Err(ConfigError::NoVehicles);
        }
        Ok(())
    }
}
