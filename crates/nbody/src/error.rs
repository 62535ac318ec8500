//! Error types for the engine.

use std::fmt;

/// Errors raised by body construction, stepping and queries.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A body was built with a non-positive mass, a negative radius or a
    /// non-finite value.
    InvalidBody(String),
    /// A query needed at least one live body.
    EmptyPopulation,
    /// `step` was called with a time slice that is not a positive finite number.
    InvalidTimestep(f64),
    /// A configuration value is out of range.
    InvalidConfig(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidBody(reason) => write!(f, "Invalid body: {}", reason),
            EngineError::EmptyPopulation => write!(f, "The population is empty"),
            EngineError::InvalidTimestep(dt) => {
                write!(f, "Time step must be positive and finite, got {}", dt)
            }
            EngineError::InvalidConfig(reason) => write!(f, "Invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for EngineError {}
