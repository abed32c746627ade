// config.rs - Simulation settings, optionally loaded from a JSON file

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::GRID_SIZE;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepperConfig {
    pub grid_size: usize,
    pub interval_ms: u64,
    pub alive_probability: f64,
    /// Fixed seed for the random start grid; drawn fresh when absent.
    pub seed: Option<u64>,
    pub live_color: [u8; 3],
    pub clear_color: [u8; 3],
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            interval_ms: 500,
            alive_probability: 0.4,
            seed: None,
            live_color: [200, 20, 100],
            clear_color: [0, 25, 51],
        }
    }
}

impl StepperConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::Invalid("grid_size must be positive".into()));
        }
        if self.interval_ms == 0 {
            return Err(ConfigError::Invalid("interval_ms must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(ConfigError::Invalid(format!(
                "alive_probability {} is outside 0..=1",
                self.alive_probability
            )));
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
