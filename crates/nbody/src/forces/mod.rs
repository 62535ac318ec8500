//! Force models for N-body simulations
//!
//! This module provides the `ForceModel` trait and the all-pairs gravity
//! used by the step loop.

use crate::body::Body;
use nalgebra::Vector2;

pub mod gravity;


pub use gravity::PairwiseGravity;

/// Default gravitational constant in engine units
pub const DEFAULT_G: f64 = 1.0;

/// A source of force on bodies in an N-body system
///
/// # Examples
///
/// ```
/// use nbody::body::{Body, Color};
/// use nbody::forces::{ForceModel, PairwiseGravity};
/// use nalgebra::{Point2, Vector2};
///
/// let bodies = vec![
///     Body::massive(Point2::new(0.0, 0.0), Vector2::zeros(), 1.0, 100.0, Color::YELLOW).unwrap(),
///     Body::massive(Point2::new(10.0, 0.0), Vector2::zeros(), 1.0, 1.0, Color::SKY_BLUE).unwrap(),
/// ];
///
/// let gravity = PairwiseGravity::new(1.0);
/// let force = gravity.force(1, &bodies);
///
/// // Pulled back toward the heavy body at the origin
/// assert!(force.x < 0.0);
/// ```
pub trait ForceModel: Send + Sync {
    /// Compute the force on the body at index `idx`
    ///
    /// Implementations must only read `bodies`; all forces of a step are
    /// evaluated against the same pre-step positions.
    fn force(&self, idx: usize, bodies: &[Body]) -> Vector2<f64>;

    /// Compute potential energy of the configuration (optional)
    ///
    /// Default implementation returns 0.0.
    fn potential_energy(&self, _bodies: &[Body]) -> f64 {
        0.0
    }
}
