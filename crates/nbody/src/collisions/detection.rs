//! Pairwise contact detection
//!
//! Every unordered pair is visited once (O(N²)). Pairs where neither body is
//! massive are never checked, and bodies already staged for removal are
//! ignored.

use std::collections::HashSet;

use crate::body::{Body, BodyId};

/// A detected contact between two bodies
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionEvent {
    /// Body with the lower index in the live store
    pub body_a: BodyId,
    /// Body with the higher index in the live store
    pub body_b: BodyId,
    /// Centre distance at detection time
    pub separation: f64,
    /// Contact threshold that was met (sum of radii)
    pub collision_radius: f64,
}

/// Check whether two bodies touch
///
/// The distance used in the comparison is floored at a quarter of the radii
/// sum, so bodies that sit almost on top of each other still register as a
/// contact; the floor has no other effect.
///
/// # Examples
///
/// ```
/// use nbody::body::{Body, Color};
/// use nbody::collisions::check_pair;
/// use nalgebra::{Point2, Vector2};
///
/// let a = Body::massive(Point2::new(0.0, 0.0), Vector2::zeros(), 5.0, 10.0, Color::WHITE).unwrap();
/// let b = Body::massive(Point2::new(8.0, 0.0), Vector2::zeros(), 5.0, 10.0, Color::WHITE).unwrap();
/// let far = Body::massive(Point2::new(20.0, 0.0), Vector2::zeros(), 5.0, 10.0, Color::WHITE).unwrap();
///
/// assert!(check_pair(&a, &b).is_some());
/// assert!(check_pair(&a, &far).is_none());
/// ```
pub fn check_pair(a: &Body, b: &Body) -> Option<CollisionEvent> {
    if !(a.is_massive() || b.is_massive()) {
        return None;
    }
    let collision_radius = a.radius() + b.radius();
    let separation = a.distance_to(b);
    let compared = separation.max(collision_radius / 4.0);
    (compared <= collision_radius).then(|| CollisionEvent {
        body_a: a.id,
        body_b: b.id,
        separation,
        collision_radius,
    })
}

/// Find every contact among the bodies not listed in `removed`
pub fn detect_collisions(bodies: &[Body], removed: &HashSet<BodyId>) -> Vec<CollisionEvent> {
    let live: Vec<&Body> = bodies
        .iter()
        .filter(|b| !removed.contains(&b.id))
        .collect();

    live.iter()
        .enumerate()
        .flat_map(|(i, a)| live[i + 1..].iter().filter_map(move |b| check_pair(a, b)))
        .collect()
}
