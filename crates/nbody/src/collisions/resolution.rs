//! Collision resolution through staged removals and momentum-conserving
//! mergers
//!
//! A merger conserves:
//! - Total mass
//! - Total momentum
//! - Area (r' = sqrt(r_a² + r_b²))

use std::collections::HashMap;

use log::debug;
use nalgebra::Point2;
use rand::Rng;

use crate::body::{Body, BodyId};
use crate::collisions::CollisionEvent;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::population::{merge_debris, Population};

/// What a resolution pass staged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionSummary {
    /// Massive-massive mergers
    pub merges: usize,
    /// Asteroids and debris swallowed by a massive body
    pub absorbed: usize,
    pub debris_spawned: usize,
}

/// Merge two massive bodies, conserving mass, momentum and area
///
/// A combined mass beyond `f64::MAX` saturates there, so the merge still
/// succeeds.
///
/// The merged color blends from `b` towards `a` by `m_a / m_b` (clamped), so
/// it lands on the heavier body's color whenever `a` is at least as heavy.
/// The result has age zero and a fresh trajectory of `trail_capacity`.
///
/// # Examples
///
/// ```
/// use nbody::body::{Body, Color};
/// use nbody::collisions::merge_bodies;
/// use nalgebra::{Point2, Vector2};
///
/// let a = Body::massive(Point2::new(0.0, 0.0), Vector2::new(1.0, 0.0), 3.0, 2.0, Color::RED).unwrap();
/// let b = Body::massive(Point2::new(3.0, 0.0), Vector2::new(0.0, 1.0), 4.0, 1.0, Color::WHITE).unwrap();
///
/// let merged = merge_bodies(&a, &b, 100).unwrap();
///
/// assert!((merged.mass() - 3.0).abs() < 1e-12);
/// assert!((merged.radius() - 5.0).abs() < 1e-12);
/// let p = merged.momentum();
/// assert!((p.x - 2.0).abs() < 1e-12 && (p.y - 1.0).abs() < 1e-12);
/// assert_eq!(merged.color, Color::RED);
/// ```
pub fn merge_bodies(a: &Body, b: &Body, trail_capacity: usize) -> Result<Body, EngineError> {
    // Saturates rather than overflowing to infinity
    let total_mass = (a.mass() + b.mass()).min(f64::MAX);
    let (wa, wb) = (a.mass() / total_mass, b.mass() / total_mass);

    let position = Point2::from(a.position.coords * wa + b.position.coords * wb);
    let velocity = a.velocity * wa + b.velocity * wb;
    let radius = a.radius().hypot(b.radius()).min(f64::MAX);
    let color = b.color.lerp(a.color, a.mass() / b.mass());

    Body::massive_with_trail(position, velocity, radius, total_mass, color, trail_capacity)
}

/// Stage the outcome of every collision event on `population`
///
/// Events are handled closest-first. An event is skipped when either body has
/// already been staged for removal, which handles cascades: a body consumed
/// by one contact cannot take part in a later one in the same step. Merged
/// bodies and their debris join the population at the next commit.
pub fn resolve_collisions<R: Rng + ?Sized>(
    population: &mut Population,
    mut events: Vec<CollisionEvent>,
    config: &EngineConfig,
    rng: &mut R,
) -> Result<ResolutionSummary, EngineError> {
    events.sort_by(|a, b| a.separation.total_cmp(&b.separation));

    let index: HashMap<BodyId, usize> = population
        .bodies()
        .iter()
        .enumerate()
        .map(|(i, b)| (b.id, i))
        .collect();

    let mut summary = ResolutionSummary::default();

    for event in events {
        if population.is_staged_for_removal(event.body_a)
            || population.is_staged_for_removal(event.body_b)
        {
            continue;
        }
        let (Some(&ia), Some(&ib)) = (index.get(&event.body_a), index.get(&event.body_b)) else {
            continue;
        };
        let a = &population.bodies()[ia];
        let b = &population.bodies()[ib];

        match (a.is_massive(), b.is_massive()) {
            (true, true) => {
                let merged = merge_bodies(a, b, config.trail.capacity)?;
                let debris =
                    merge_debris(&merged, population.len(), &config.debris, rng)?;
                debug!(
                    "merged {:?} and {:?} (mass {:.3}, radius {:.3}), {} debris",
                    event.body_a,
                    event.body_b,
                    merged.mass(),
                    merged.radius(),
                    debris.len()
                );
                population.stage_remove(event.body_a);
                population.stage_remove(event.body_b);
                population.stage_add(merged);
                summary.merges += 1;
                summary.debris_spawned += debris.len();
                for particle in debris {
                    population.stage_add(particle);
                }
            }
            (true, false) => {
                population.stage_remove(event.body_b);
                summary.absorbed += 1;
            }
            (false, true) => {
                population.stage_remove(event.body_a);
                summary.absorbed += 1;
            }
            (false, false) => {}
        }
    }

    Ok(summary)
}
