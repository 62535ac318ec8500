//! Interactive 2D N-body engine
//!
//! Massive bodies attract each other pairwise and merge on contact, shedding
//! debris; asteroids and debris only feel gravity. [`state::SystemState`]
//! drives the step loop and everything else is reachable from it.

pub mod body;
pub mod collisions;
pub mod config;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod population;
pub mod snapshot;
pub mod state;
pub mod trajectory;

pub use body::{Body, BodyId, BodyKind, Color};
pub use config::EngineConfig;
pub use error::EngineError;
pub use snapshot::{BodySnapshot, TrailSnapshot, WorldSnapshot};
pub use state::{StepReport, SystemState};

#[cfg(test)]
mod snapshot_test;
#[cfg(test)]
mod trajectory_test;
