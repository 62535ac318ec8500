//! Procedural system construction for the nbody engine
//!
//! Two primitives place bodies on circular orbits: [`orbits::circular_orbit`]
//! for single bodies and [`orbits::asteroid_belt`] for rings of asteroids.
//! Named presets compose them with literal constants into complete
//! [`Scenario`]s.

pub mod builder;
pub mod orbits;
pub mod presets;

pub use builder::SystemBuilder;
pub use orbits::{asteroid_belt, circular_orbit, circular_velocity, AsteroidStyle, Direction};
pub use presets::{Preset, Scenario, UnknownPreset};

#[cfg(test)]
mod orbits_test;
