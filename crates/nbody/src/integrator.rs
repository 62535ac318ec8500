//! Time integration for N-body systems
//!
//! The engine advances bodies with semi-implicit (symplectic) Euler: the
//! velocity is kicked by the step's force first and the position then
//! drifts with the updated velocity.

use std::collections::HashSet;

use log::warn;
use nalgebra::{Point2, Vector2};

use crate::body::{Body, BodyId};
use crate::forces::ForceModel;

/// Semi-implicit Euler integrator (1st order, symplectic)
///
/// 1. Accumulate: F_i from the pre-step positions of every body
/// 2. Kick: v(t + dt) = v(t) + F_i / m_i * dt
/// 3. Drift: x(t + dt) = x(t) + v(t + dt) * dt
///
/// Bodies whose id is in `skip` (already staged for removal) neither move
/// nor accumulate force, although massive ones still act as sources.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use nbody::body::{Body, Color};
/// use nbody::forces::PairwiseGravity;
/// use nbody::integrator::SemiImplicitEuler;
/// use nalgebra::{Point2, Vector2};
///
/// let mut bodies = vec![
///     Body::massive(Point2::new(0.0, 0.0), Vector2::zeros(), 1.0, 1000.0, Color::YELLOW).unwrap(),
///     Body::massive(Point2::new(10.0, 0.0), Vector2::new(0.0, 10.0), 0.5, 1.0, Color::SKY_BLUE).unwrap(),
/// ];
///
/// SemiImplicitEuler.step(&mut bodies, &HashSet::new(), 0.01, &PairwiseGravity::new(1.0));
/// assert!(bodies[1].position.y > 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SemiImplicitEuler;

impl SemiImplicitEuler {
    pub fn step(
        &self,
        bodies: &mut [Body],
        skip: &HashSet<BodyId>,
        dt: f64,
        force: &dyn ForceModel,
    ) {
        // Every force is read from the same pre-step snapshot of positions
        let snapshot: &[Body] = bodies;
        let forces: Vec<Option<Vector2<f64>>> = snapshot
            .iter()
            .enumerate()
            .map(|(i, body)| (!skip.contains(&body.id)).then(|| force.force(i, snapshot)))
            .collect();

        bodies
            .iter_mut()
            .zip(forces)
            .filter_map(|(body, f)| f.map(|f| (body, f)))
            .for_each(|(body, f)| {
                body.force += f;
                body.velocity += body.force / body.mass() * dt;
                body.position += body.velocity * dt;
                body.force = Vector2::zeros();
                saturate(body);
            });
    }
}

/// Replace non-finite state with the nearest representable value
///
/// NaN components become zero and infinities clamp to `±f64::MAX`, so a
/// single overflow cannot poison every later step.
fn saturate(body: &mut Body) {
    let velocity_ok = body.velocity.iter().all(|c| c.is_finite());
    let position_ok = body.position.coords.iter().all(|c| c.is_finite());
    if velocity_ok && position_ok {
        return;
    }
    warn!(
        "body {:?} left the representable range (position {:?}, velocity {:?}); saturating",
        body.id, body.position, body.velocity
    );
    body.velocity = body.velocity.map(clamp_component);
    body.position = Point2::from(body.position.coords.map(clamp_component));
}

fn clamp_component(c: f64) -> f64 {
    if c.is_nan() {
        0.0
    } else {
        c.clamp(f64::MIN, f64::MAX)
    }
}
