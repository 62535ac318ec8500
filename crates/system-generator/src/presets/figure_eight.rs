//! Chenciner-Montgomery three-body choreography
//!
//! The classic initial conditions are for G = 1 and unit masses. Scaling
//! lengths by `L` and masses by `M` keeps the orbit a solution when
//! velocities are scaled by `sqrt(G M / L)`.

use nalgebra::{Point2, Vector2};

use nbody::body::{Body, Color};
use nbody::error::EngineError;

pub const GRAVITY: f64 = 1.0;
pub const TIME_MULTIPLIER: f64 = 2.0;

const LENGTH_SCALE: f64 = 100.0;
const MASS: f64 = 1000.0;
const RADIUS: f64 = 4.0;

const X1: [f64; 2] = [0.970_004_36, -0.243_087_53];
const V3: [f64; 2] = [-0.932_407_37, -0.864_731_46];

pub fn bodies() -> Result<Vec<Body>, EngineError> {
    let velocity_scale = (GRAVITY * MASS / LENGTH_SCALE).sqrt();
    let x1 = Vector2::new(X1[0], X1[1]) * LENGTH_SCALE;
    let v3 = Vector2::new(V3[0], V3[1]) * velocity_scale;
    let v1 = -v3 / 2.0;

    Ok(vec![
        Body::massive(Point2::from(x1), v1, RADIUS, MASS, Color::RED)?,
        Body::massive(Point2::from(-x1), v1, RADIUS, MASS, Color::CORNFLOWER_BLUE)?,
        Body::massive(Point2::origin(), v3, RADIUS, MASS, Color::YELLOW)?,
    ])
}
