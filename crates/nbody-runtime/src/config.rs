//! Runtime configuration loaded from JSON
//!
//! ```json
//! {
//!   "preset": "binary",
//!   "seed": 7,
//!   "minIntervalMicros": 1000,
//!   "maxFrameMillis": 50,
//!   "engine": { "debris": { "lifetime": 10.0 } }
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use nbody::config::EngineConfig;
use nbody::error::EngineError;
use system_generator::Preset;

use crate::error::SimulationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuntimeConfig {
    /// Preset loaded at start-up
    pub preset: String,
    /// Seed for generation and debris; drawn at random when absent
    pub seed: Option<u64>,
    /// Shortest wall-clock time between two loop iterations
    pub min_interval_micros: u64,
    /// Longest wall-clock frame fed to the step, so a stall does not turn
    /// into one huge time slice
    pub max_frame_millis: u64,
    /// Use this many virtual seconds per step instead of the wall clock
    pub fixed_dt: Option<f64>,
    pub engine: EngineConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            preset: Preset::Toy.name().to_string(),
            seed: None,
            min_interval_micros: 1_000,
            max_frame_millis: 50,
            fixed_dt: None,
            engine: EngineConfig::default(),
        }
    }
}

impl RuntimeConfig {
    /// Reads and validates a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let file = File::open(path)?;
        let config: RuntimeConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        self.preset.parse::<Preset>()?;
        if self.max_frame_millis == 0 {
            return Err(invalid("maxFrameMillis must be at least 1"));
        }
        if let Some(dt) = self.fixed_dt {
            if !dt.is_finite() || dt <= 0.0 {
                return Err(invalid("fixedDt must be positive"));
            }
        }
        self.engine.validate()?;
        Ok(())
    }

    pub fn min_interval(&self) -> Duration {
        Duration::from_micros(self.min_interval_micros)
    }

    pub fn max_frame(&self) -> Duration {
        Duration::from_millis(self.max_frame_millis)
    }
}

fn invalid(reason: &str) -> SimulationError {
    SimulationError::Engine(EngineError::InvalidConfig(reason.to_string()))
}
