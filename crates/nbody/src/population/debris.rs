//! Debris particle spawning

use std::f64::consts::TAU;

use nalgebra::{Point2, Vector2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::body::{Body, Color};
use crate::config::DebrisConfig;
use crate::error::EngineError;

/// Band of ejection speeds, `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRange {
    pub min: f64,
    pub max: f64,
}

impl SpeedRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Rejects bands with a negative or non-finite bound
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.min.is_finite() && self.max.is_finite()) || self.min < 0.0 {
            return Err(EngineError::InvalidBody(format!(
                "debris speed range must be finite and non-negative, got {:?}",
                self
            )));
        }
        Ok(())
    }

    /// Draw a speed; a degenerate band always yields `min`
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.max > self.min {
            rng.random_range(self.min..self.max)
        } else {
            self.min
        }
    }
}

impl From<&DebrisConfig> for SpeedRange {
    fn from(config: &DebrisConfig) -> Self {
        Self::new(config.speed_min, config.speed_max)
    }
}

/// Uniformly distributed direction on the unit circle
pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Vector2<f64> {
    let angle = rng.random_range(0.0..TAU);
    Vector2::new(angle.cos(), angle.sin())
}

fn jittered_age<R: Rng + ?Sized>(rng: &mut R, jitter: f64) -> f64 {
    if jitter > 0.0 {
        rng.random_range(-jitter..jitter)
    } else {
        0.0
    }
}

/// Debris thrown off a freshly merged body
///
/// The particle count follows the throttle for the current live population.
/// Each particle starts just outside the merged body's surface, moving
/// straight outward, with a jittered age so one merge does not expire all at
/// once.
pub fn merge_debris<R: Rng + ?Sized>(
    merged: &Body,
    live_population: usize,
    config: &DebrisConfig,
    rng: &mut R,
) -> Result<Vec<Body>, EngineError> {
    let count = config.throttle.spawn_count(merged.radius(), live_population);
    let speed = SpeedRange::from(config);
    (0..count)
        .map(|_| {
            let dir = random_unit(rng);
            let position = merged.position + dir * merged.radius() * config.surface_offset;
            let mut particle = Body::debris(
                position,
                dir * speed.sample(rng),
                config.radius,
                config.mass,
                merged.color,
            )?;
            particle.age = jittered_age(rng, config.age_jitter);
            Ok(particle)
        })
        .collect()
}

/// A user-triggered burst of `count` debris particles from one point
pub fn debris_burst<R: Rng + ?Sized>(
    position: Point2<f64>,
    count: usize,
    speed: SpeedRange,
    color: Color,
    config: &DebrisConfig,
    rng: &mut R,
) -> Result<Vec<Body>, EngineError> {
    speed.validate()?;
    (0..count)
        .map(|_| {
            let dir = random_unit(rng);
            Body::debris(position, dir * speed.sample(rng), config.radius, config.mass, color)
        })
        .collect()
}
