use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::trajectory::{Trajectory, DEFAULT_TRAIL_CAPACITY};

/// Identity of a body inside a population
///
/// Two bodies with identical numeric state are still distinct entities;
/// removal and lookup always go through this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub u64);

/// Cosmetic tag carried through merges; opaque to the physics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const RED: Color = Color::rgb(220, 60, 40);
    pub const SKY_BLUE: Color = Color::rgb(135, 206, 235);
    pub const CORNFLOWER_BLUE: Color = Color::rgb(100, 149, 237);
    pub const CADET_BLUE: Color = Color::rgb(95, 158, 160);
    pub const LIGHT_BLUE: Color = Color::rgb(173, 216, 230);
    pub const TAN: Color = Color::rgb(210, 180, 140);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation from `self` towards `other`
    ///
    /// `amount` is clamped to `[0, 1]`, so 0 keeps `self` and anything at or
    /// above 1 yields `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::Color;
    ///
    /// let black = Color::rgb(0, 0, 0);
    /// assert_eq!(black.lerp(Color::WHITE, 0.5), Color::rgb(128, 128, 128));
    /// assert_eq!(black.lerp(Color::WHITE, 7.0), Color::WHITE);
    /// ```
    pub fn lerp(self, other: Color, amount: f64) -> Color {
        let t = if amount.is_nan() { 0.0 } else { amount.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

/// Which of the three body sorts a body is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyKind {
    /// Gravitating, collidable, mergeable; keeps a trajectory
    Massive,
    /// Feels gravity but exerts none; only collides with massive bodies
    Asteroid,
    /// Short-lived particle; exerts no gravity, expires with age
    Debris,
}

#[derive(Debug, Clone, PartialEq)]
enum Class {
    Massive(Trajectory),
    Asteroid,
    Debris,
}

/// A point mass with extent
///
/// Kind is fixed at construction; massive bodies carry their trajectory
/// inside the kind tag so the buffer cannot exist for any other kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub position: Point2<f64>,
    pub velocity: Vector2<f64>,
    /// Seconds of virtual time since creation (may start negative for debris)
    pub age: f64,
    pub color: Color,
    pub(crate) force: Vector2<f64>,
    mass: f64,
    radius: f64,
    class: Class,
}

fn validate(mass: f64, radius: f64) -> Result<(), EngineError> {
    if !mass.is_finite() || mass <= 0.0 {
        return Err(EngineError::InvalidBody(format!(
            "mass must be positive and finite, got {}",
            mass
        )));
    }
    if !radius.is_finite() || radius < 0.0 {
        return Err(EngineError::InvalidBody(format!(
            "radius must be non-negative and finite, got {}",
            radius
        )));
    }
    Ok(())
}

impl Body {
    fn build(
        class: Class,
        position: Point2<f64>,
        velocity: Vector2<f64>,
        radius: f64,
        mass: f64,
        color: Color,
    ) -> Result<Self, EngineError> {
        validate(mass, radius)?;
        Ok(Self {
            id: BodyId(0),
            position,
            velocity,
            age: 0.0,
            color,
            force: Vector2::zeros(),
            mass,
            radius,
            class,
        })
    }

    /// Creates a massive body with a trajectory of the default capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::{Body, BodyKind, Color};
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let sun = Body::massive(Point2::origin(), Vector2::zeros(), 60.0, 330_000.0, Color::YELLOW)
    ///     .unwrap();
    /// assert_eq!(sun.kind(), BodyKind::Massive);
    /// assert!(sun.trajectory().is_some());
    ///
    /// assert!(Body::massive(Point2::origin(), Vector2::zeros(), 1.0, 0.0, Color::WHITE).is_err());
    /// ```
    pub fn massive(
        position: Point2<f64>,
        velocity: Vector2<f64>,
        radius: f64,
        mass: f64,
        color: Color,
    ) -> Result<Self, EngineError> {
        Self::massive_with_trail(position, velocity, radius, mass, color, DEFAULT_TRAIL_CAPACITY)
    }

    /// Creates a massive body with an explicit trajectory capacity
    pub fn massive_with_trail(
        position: Point2<f64>,
        velocity: Vector2<f64>,
        radius: f64,
        mass: f64,
        color: Color,
        trail_capacity: usize,
    ) -> Result<Self, EngineError> {
        let trail = Trajectory::new(position, trail_capacity);
        Self::build(Class::Massive(trail), position, velocity, radius, mass, color)
    }

    /// Replaces a massive body's trajectory with an empty one of `capacity`
    /// starting at the current position; other kinds are returned unchanged
    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        if let Class::Massive(trail) = &mut self.class {
            if trail.capacity() != capacity.max(1) {
                *trail = Trajectory::new(self.position, capacity);
            }
        }
        self
    }

    pub fn asteroid(
        position: Point2<f64>,
        velocity: Vector2<f64>,
        radius: f64,
        mass: f64,
        color: Color,
    ) -> Result<Self, EngineError> {
        Self::build(Class::Asteroid, position, velocity, radius, mass, color)
    }

    pub fn debris(
        position: Point2<f64>,
        velocity: Vector2<f64>,
        radius: f64,
        mass: f64,
        color: Color,
    ) -> Result<Self, EngineError> {
        Self::build(Class::Debris, position, velocity, radius, mass, color)
    }

    pub fn kind(&self) -> BodyKind {
        match self.class {
            Class::Massive(_) => BodyKind::Massive,
            Class::Asteroid => BodyKind::Asteroid,
            Class::Debris => BodyKind::Debris,
        }
    }

    pub fn is_massive(&self) -> bool {
        matches!(self.class, Class::Massive(_))
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Force accumulated during the current step (zero between steps)
    pub fn force(&self) -> Vector2<f64> {
        self.force
    }

    pub fn trajectory(&self) -> Option<&Trajectory> {
        match &self.class {
            Class::Massive(trail) => Some(trail),
            _ => None,
        }
    }

    /// Writes the current position into the trajectory, if this body has one
    pub(crate) fn record_trail(&mut self, precision: u32) {
        let (position, age) = (self.position, self.age);
        if let Class::Massive(trail) = &mut self.class {
            trail.record(position, age, precision);
        }
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).magnitude()
    }
}
