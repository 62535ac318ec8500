//! Real-time driver for the nbody engine
//!
//! [`SimulationHandle`] runs the physics loop on a background thread, paced
//! by the wall clock. Callers send commands through the handle and read
//! immutable [`WorldSnapshot`](nbody::WorldSnapshot)s back.

pub mod clock;
pub mod command;
pub mod config;
pub mod error;
pub mod handle;
pub mod logging;
pub mod simulation;

pub use command::Command;
pub use config::RuntimeConfig;
pub use error::SimulationError;
pub use handle::{SimulationHandle, SnapshotReader};
pub use simulation::Simulation;

#[cfg(test)]
mod simulation_test;
