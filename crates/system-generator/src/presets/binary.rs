//! Two equal stars with circumbinary (P-type) and single-star (S-type)
//! planets
//!
//! The stars and the circumbinary planets orbit centre-of-mass helpers that
//! are never part of the system: for two stars of mass `m` at separation `d`,
//! each circles the barycentre like a body around a point mass `m / 4` at
//! distance `d / 2`.

use nalgebra::{Point2, Vector2};

use nbody::body::{Body, Color};
use nbody::error::EngineError;

use crate::builder::SystemBuilder;
use crate::orbits::{anchor_point, polar, Direction};

pub const GRAVITY: f64 = 1.0;
pub const TIME_MULTIPLIER: f64 = 1.0;

const STAR_MASS: f64 = 40_000.0;
const STAR_RADIUS: f64 = 25.0;
const HALF_SEPARATION: f64 = 150.0;

pub fn bodies() -> Result<Vec<Body>, EngineError> {
    let mut builder = SystemBuilder::new(GRAVITY, 0);

    let pair = anchor_point(Point2::origin(), Vector2::zeros(), STAR_MASS / 4.0)?;
    let star_a = builder
        .orbit(
            &pair,
            polar(HALF_SEPARATION, 0.0),
            Color::ORANGE,
            STAR_RADIUS,
            STAR_MASS,
            Direction::Prograde,
        )?
        .clone();
    builder.orbit(
        &pair,
        polar(HALF_SEPARATION, std::f64::consts::PI),
        Color::YELLOW,
        STAR_RADIUS,
        STAR_MASS,
        Direction::Prograde,
    )?;

    let barycentre = anchor_point(Point2::origin(), Vector2::zeros(), 2.0 * STAR_MASS)?;
    builder.orbit(&barycentre, polar(900.0, 1.0), Color::CADET_BLUE, 8.0, 2.0, Direction::Prograde)?;
    builder.orbit(&barycentre, polar(1300.0, 4.0), Color::TAN, 12.0, 5.0, Direction::Prograde)?;

    builder.orbit(&star_a, polar(45.0, 0.0), Color::RED, 5.0, 1.0, Direction::Prograde)?;

    Ok(builder.finish())
}
