//! Circular-orbit placement
//!
//! Every velocity here is the two-body Keplerian circular speed around a
//! single anchor, `v = sqrt(G * M / r)`, ignoring every other body.

use std::f64::consts::TAU;

use nalgebra::{Point2, Vector2};
use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use nbody::body::{Body, Color};
use nbody::error::EngineError;

/// Sense of rotation around the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Counter-clockwise in a y-up frame
    Prograde,
    Retrograde,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Prograde => 1.0,
            Direction::Retrograde => -1.0,
        }
    }
}

/// Velocity of a circular orbit at `offset` from `anchor`
///
/// The anchor's own velocity is added so orbits ride along with a moving
/// anchor. A zero offset has no defined tangent and yields the anchor's
/// velocity.
///
/// # Examples
///
/// ```
/// use nalgebra::{Point2, Vector2};
/// use nbody::body::{Body, Color};
/// use system_generator::{circular_velocity, Direction};
///
/// let sun = Body::massive(Point2::origin(), Vector2::zeros(), 1.0, 1000.0, Color::YELLOW).unwrap();
/// let v = circular_velocity(&sun, Vector2::new(10.0, 0.0), 1.0, Direction::Prograde);
///
/// assert!((v.y - 10.0).abs() < 1e-12);
/// assert!(v.x.abs() < 1e-12);
/// ```
pub fn circular_velocity(
    anchor: &Body,
    offset: Vector2<f64>,
    gravity: f64,
    direction: Direction,
) -> Vector2<f64> {
    let r = offset.magnitude();
    if r == 0.0 || !r.is_finite() {
        return anchor.velocity;
    }
    let speed = (gravity * anchor.mass() / r).sqrt() * direction.sign();
    let tangent = Vector2::new(-offset.y, offset.x) / r;
    anchor.velocity + tangent * speed
}

/// A massive body on a circular orbit around `anchor`
pub fn circular_orbit(
    anchor: &Body,
    offset: Vector2<f64>,
    color: Color,
    radius: f64,
    mass: f64,
    direction: Direction,
    gravity: f64,
) -> Result<Body, EngineError> {
    Body::massive(
        anchor.position + offset,
        circular_velocity(anchor, offset, gravity, direction),
        radius,
        mass,
        color,
    )
}

/// Shared look of every asteroid in a belt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsteroidStyle {
    pub mass: f64,
    pub radius: f64,
    pub color: Color,
}

impl Default for AsteroidStyle {
    fn default() -> Self {
        Self {
            mass: 0.01,
            radius: 2.0,
            color: Color::GRAY,
        }
    }
}

/// Ring of `count` asteroids between `r_min` and `r_max` from `anchor`
///
/// Orbit radius is uniform in `[r_min, r_max]` and the angle uniform in
/// `[0, 2π)`. A reversed band is accepted and swapped.
#[allow(clippy::too_many_arguments)]
pub fn asteroid_belt(
    rng: &mut ChaChaRng,
    r_min: f64,
    r_max: f64,
    count: usize,
    anchor: &Body,
    direction: Direction,
    gravity: f64,
    style: AsteroidStyle,
) -> Result<Vec<Body>, EngineError> {
    let (lo, hi) = if r_min <= r_max { (r_min, r_max) } else { (r_max, r_min) };
    if !(lo.is_finite() && hi.is_finite()) || lo < 0.0 {
        return Err(EngineError::InvalidConfig(format!(
            "asteroid belt radii must be finite and non-negative, got {}..{}",
            r_min, r_max
        )));
    }

    (0..count)
        .map(|_| {
            let r = rng.random_range(lo..=hi);
            let angle = rng.random_range(0.0..TAU);
            let offset = Vector2::new(angle.cos(), angle.sin()) * r;
            Body::asteroid(
                anchor.position + offset,
                circular_velocity(anchor, offset, gravity, direction),
                style.radius,
                style.mass,
                style.color,
            )
        })
        .collect()
}

/// Offset of length `r` at `angle` radians from the +x axis
pub fn polar(r: f64, angle: f64) -> Vector2<f64> {
    Vector2::new(angle.cos(), angle.sin()) * r
}

/// Centre-of-mass helper used as an orbit anchor but never simulated
///
/// Zero radius keeps it out of any contact checks should it ever be
/// inspected alongside real bodies.
pub fn anchor_point(
    position: Point2<f64>,
    velocity: Vector2<f64>,
    mass: f64,
) -> Result<Body, EngineError> {
    Body::massive_with_trail(position, velocity, 0.0, mass, Color::WHITE, 1)
}
