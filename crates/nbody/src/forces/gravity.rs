//! Direct N-body gravity (O(N²) implementation)

use crate::body::Body;
use crate::forces::{ForceModel, DEFAULT_G};
use nalgebra::Vector2;

/// Smallest separation at which a pair still exerts force
pub const DEFAULT_MIN_SEPARATION: f64 = 1e-9;

/// All-pairs Newtonian gravity between point masses
///
/// Only massive bodies act as sources: asteroids and debris feel the pull of
/// massive bodies but exert nothing themselves. Pairs closer than
/// `min_separation` contribute no force instead of an undefined direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairwiseGravity {
    /// Gravitational constant
    pub gravity: f64,
    /// Separations below this are treated as zero force
    pub min_separation: f64,
}

impl PairwiseGravity {
    pub fn new(gravity: f64) -> Self {
        Self {
            gravity,
            min_separation: DEFAULT_MIN_SEPARATION,
        }
    }

    /// Creates gravity with an explicit separation floor
    pub fn with_min_separation(gravity: f64, min_separation: f64) -> Self {
        Self {
            gravity,
            min_separation,
        }
    }

    /// Force on `body` from a single `source`
    pub fn pair_force(&self, body: &Body, source: &Body) -> Vector2<f64> {
        let offset = body.position - source.position;
        let distance_sq = offset.magnitude_squared();
        let distance = distance_sq.sqrt();
        if distance.is_nan() || distance < self.min_separation {
            return Vector2::zeros();
        }
        let magnitude = self.gravity * body.mass() * source.mass() / distance_sq;
        -(offset / distance) * magnitude
    }
}

impl Default for PairwiseGravity {
    fn default() -> Self {
        Self::new(DEFAULT_G)
    }
}

impl ForceModel for PairwiseGravity {
    fn force(&self, idx: usize, bodies: &[Body]) -> Vector2<f64> {
        let body = &bodies[idx];
        bodies
            .iter()
            .enumerate()
            .filter(|(i, other)| *i != idx && other.is_massive())
            .map(|(_, other)| self.pair_force(body, other))
            .fold(Vector2::zeros(), |acc, f| acc + f)
    }

    fn potential_energy(&self, bodies: &[Body]) -> f64 {
        // Only pairs with a massive source carry potential; each pair counted once
        bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                bodies[i + 1..].iter().filter_map(move |b| {
                    if !(a.is_massive() || b.is_massive()) {
                        return None;
                    }
                    let r = a.distance_to(b);
                    (r >= self.min_separation).then(|| -self.gravity * a.mass() * b.mass() / r)
                })
            })
            .sum()
    }
}
