use log::debug;
use nalgebra::Vector2;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use nbody::body::{Body, Color};
use nbody::error::EngineError;

use crate::orbits::{asteroid_belt, circular_orbit, AsteroidStyle, Direction};

/// Accumulates the bodies of a system under one gravitational constant
///
/// Seeded so that a preset built twice with the same seed is identical.
///
/// # Examples
///
/// ```
/// use nalgebra::{Point2, Vector2};
/// use nbody::body::{Body, Color};
/// use system_generator::{AsteroidStyle, Direction, SystemBuilder};
///
/// let mut builder = SystemBuilder::new(1.0, 42);
/// let sun = builder
///     .add(Body::massive(Point2::origin(), Vector2::zeros(), 10.0, 1000.0, Color::YELLOW).unwrap())
///     .clone();
/// builder
///     .orbit(&sun, Vector2::new(100.0, 0.0), Color::SKY_BLUE, 2.0, 1.0, Direction::Prograde)
///     .unwrap();
/// builder
///     .belt(&sun, 200.0, 250.0, 30, Direction::Prograde, AsteroidStyle::default())
///     .unwrap();
///
/// assert_eq!(builder.len(), 32);
/// ```
#[derive(Debug, Clone)]
pub struct SystemBuilder {
    gravity: f64,
    rng: ChaChaRng,
    bodies: Vec<Body>,
}

impl SystemBuilder {
    pub fn new(gravity: f64, seed: u64) -> Self {
        Self {
            gravity,
            rng: ChaChaRng::seed_from_u64(seed),
            bodies: Vec::new(),
        }
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Adds a body as-is and returns the stored copy
    pub fn add(&mut self, body: Body) -> &Body {
        self.bodies.push(body);
        &self.bodies[self.bodies.len() - 1]
    }

    /// Adds a massive body on a circular orbit around `anchor`
    pub fn orbit(
        &mut self,
        anchor: &Body,
        offset: Vector2<f64>,
        color: Color,
        radius: f64,
        mass: f64,
        direction: Direction,
    ) -> Result<&Body, EngineError> {
        let body = circular_orbit(anchor, offset, color, radius, mass, direction, self.gravity)?;
        Ok(self.add(body))
    }

    /// Adds an asteroid belt around `anchor` and returns how many were added
    pub fn belt(
        &mut self,
        anchor: &Body,
        r_min: f64,
        r_max: f64,
        count: usize,
        direction: Direction,
        style: AsteroidStyle,
    ) -> Result<usize, EngineError> {
        let belt = asteroid_belt(
            &mut self.rng,
            r_min,
            r_max,
            count,
            anchor,
            direction,
            self.gravity,
            style,
        )?;
        debug!("seeded {} asteroids between {} and {}", belt.len(), r_min, r_max);
        self.bodies.extend(belt);
        Ok(count)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn finish(self) -> Vec<Body> {
        self.bodies
    }
}
