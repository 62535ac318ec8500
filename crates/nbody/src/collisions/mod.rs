//! Collision detection and resolution
//!
//! Contacts are found on post-integration positions and resolved by staging
//! changes on the population: massive bodies absorb lighter kinds, and two
//! massive bodies merge into one while shedding debris.

pub mod detection;
pub mod resolution;

#[cfg(test)]
mod resolution_test;

pub use detection::{check_pair, detect_collisions, CollisionEvent};
pub use resolution::{merge_bodies, resolve_collisions, ResolutionSummary};
