//! Compact system in engine units (G = 1)

use std::f64::consts::PI;

use nalgebra::{Point2, Vector2};

use nbody::body::{Body, Color};
use nbody::error::EngineError;

use crate::builder::SystemBuilder;
use crate::orbits::{polar, AsteroidStyle, Direction};

pub const GRAVITY: f64 = 1.0;
pub const TIME_MULTIPLIER: f64 = 1.0;

const SUN_MASS: f64 = 330_000.0;
const SUN_RADIUS: f64 = 60.0;

const BELT_INNER: f64 = 750.0;
const BELT_OUTER: f64 = 850.0;
const BELT_COUNT: usize = 150;

pub fn bodies(seed: u64) -> Result<Vec<Body>, EngineError> {
    let mut builder = SystemBuilder::new(GRAVITY, seed);
    let sun = builder
        .add(Body::massive(Point2::origin(), Vector2::zeros(), SUN_RADIUS, SUN_MASS, Color::YELLOW)?)
        .clone();

    let inner = [
        (300.0, 0.0, Color::CORNFLOWER_BLUE, 10.0),
        (450.0, 0.5 * PI, Color::CADET_BLUE, 12.0),
        (600.0, PI, Color::LIGHT_BLUE, 10.0),
    ];
    for (r, angle, color, radius) in inner {
        builder.orbit(&sun, polar(r, angle), color, radius, 1.0, Direction::Prograde)?;
    }

    builder.belt(
        &sun,
        BELT_INNER,
        BELT_OUTER,
        BELT_COUNT,
        Direction::Prograde,
        AsteroidStyle::default(),
    )?;

    // Heavier planet with a moon well inside its Hill sphere
    let planet = builder
        .orbit(&sun, polar(1000.0, 1.5 * PI), Color::TAN, 14.0, 300.0, Direction::Prograde)?
        .clone();
    builder.orbit(&planet, polar(25.0, 0.0), Color::GRAY, 3.0, 0.5, Direction::Prograde)?;

    builder.orbit(
        &sun,
        polar(1400.0, 0.25 * PI),
        Color::SKY_BLUE,
        10.0,
        1.0,
        Direction::Retrograde,
    )?;

    Ok(builder.finish())
}
