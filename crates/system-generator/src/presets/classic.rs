//! Sun, four light planets and a heavy intruder
//!
//! Hand-placed positions and velocities rather than circular orbits, under a
//! stronger gravitational constant; the intruder usually swallows something
//! within the first minute.

use nalgebra::{Point2, Vector2};

use nbody::body::{Body, Color};
use nbody::error::EngineError;

pub const GRAVITY: f64 = 30.0;
pub const TIME_MULTIPLIER: f64 = 1.0;

pub fn bodies() -> Result<Vec<Body>, EngineError> {
    let light = |color, x: f64, y: f64, vx: f64, vy: f64| {
        Body::massive(Point2::new(x, y), Vector2::new(vx, vy), 10.0, 1.0, color)
    };

    Ok(vec![
        Body::massive(Point2::new(1.0, 0.0), Vector2::zeros(), 60.0, 330_000.0, Color::YELLOW)?,
        light(Color::CORNFLOWER_BLUE, 200.0, 200.0, 120.0, -120.0)?,
        light(Color::CADET_BLUE, -200.0, 200.0, 120.0, 120.0)?,
        light(Color::LIGHT_BLUE, 200.0, -200.0, -120.0, -120.0)?,
        light(Color::SKY_BLUE, -200.0, -200.0, -120.0, 120.0)?,
        Body::massive(Point2::new(-600.0, 200.0), Vector2::new(60.0, -20.0), 20.0, 300_000.0, Color::SKY_BLUE)?,
    ])
}
