//! Error types for the real-time driver.

use std::fmt;

use nbody::error::EngineError;
use system_generator::UnknownPreset;

/// Errors raised while configuring or talking to a running simulation.
#[derive(Debug)]
pub enum SimulationError {
    /// The engine rejected a body, a query or a setting.
    Engine(EngineError),
    /// The configured starting preset does not exist.
    UnknownPreset(UnknownPreset),
    /// Reading a configuration file or starting the physics thread failed.
    Io(std::io::Error),
    /// A configuration file is not valid JSON for [`RuntimeConfig`](crate::config::RuntimeConfig).
    Json(serde_json::Error),
    /// The physics thread is no longer running.
    Disconnected,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Engine(e) => write!(f, "Engine error: {}", e),
            SimulationError::UnknownPreset(e) => write!(f, "{}", e),
            SimulationError::Io(e) => write!(f, "I/O error: {}", e),
            SimulationError::Json(e) => write!(f, "Failed to parse configuration: {}", e),
            SimulationError::Disconnected => write!(f, "The simulation thread has stopped"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Engine(e) => Some(e),
            SimulationError::UnknownPreset(e) => Some(e),
            SimulationError::Io(e) => Some(e),
            SimulationError::Json(e) => Some(e),
            SimulationError::Disconnected => None,
        }
    }
}

impl From<EngineError> for SimulationError {
    fn from(e: EngineError) -> Self {
        SimulationError::Engine(e)
    }
}

impl From<UnknownPreset> for SimulationError {
    fn from(e: UnknownPreset) -> Self {
        SimulationError::UnknownPreset(e)
    }
}

impl From<std::io::Error> for SimulationError {
    fn from(e: std::io::Error) -> Self {
        SimulationError::Io(e)
    }
}

impl From<serde_json::Error> for SimulationError {
    fn from(e: serde_json::Error) -> Self {
        SimulationError::Json(e)
    }
}
