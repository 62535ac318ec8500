//! Scale model of the Solar System
//!
//! Units: gigametres, Earth masses and seconds. In these units
//! `G = 3.986e-13 Gm³ M⊕⁻¹ s⁻²` (the geocentric gravitational constant).

use nalgebra::{Point2, Vector2};

use nbody::body::{Body, Color};
use nbody::config::{DebrisConfig, DebrisThrottle};
use nbody::error::EngineError;

use crate::builder::SystemBuilder;
use crate::orbits::{polar, AsteroidStyle, Direction};

pub const GRAVITY: f64 = 3.986e-13;

/// 30 days per wall-clock second
pub const FAST_TIME_MULTIPLIER: f64 = 30.0 * 86_400.0;
/// 1 day per wall-clock second
pub const REALISTIC_TIME_MULTIPLIER: f64 = 86_400.0;

const SUN_MASS: f64 = 332_946.0;
const SUN_RADIUS: f64 = 0.696;

struct Planet {
    mass: f64,
    distance: f64,
    radius: f64,
    color: Color,
}

/// Mean orbital distance, mass and equatorial radius
const PLANETS: [Planet; 8] = [
    Planet { mass: 0.0553, distance: 57.9, radius: 0.00244, color: Color::GRAY },
    Planet { mass: 0.815, distance: 108.2, radius: 0.00605, color: Color::TAN },
    Planet { mass: 1.0, distance: 149.6, radius: 0.006371, color: Color::CORNFLOWER_BLUE },
    Planet { mass: 0.107, distance: 227.9, radius: 0.00339, color: Color::RED },
    Planet { mass: 317.8, distance: 778.6, radius: 0.0699, color: Color::ORANGE },
    Planet { mass: 95.2, distance: 1433.5, radius: 0.0582, color: Color::TAN },
    Planet { mass: 14.5, distance: 2872.5, radius: 0.0254, color: Color::LIGHT_BLUE },
    Planet { mass: 17.1, distance: 4495.1, radius: 0.0246, color: Color::CADET_BLUE },
];

const EARTH: usize = 2;

const MOON_MASS: f64 = 0.0123;
const MOON_DISTANCE: f64 = 0.3844;
const MOON_RADIUS: f64 = 0.001737;

const BELT_INNER: f64 = 329.0;
const BELT_OUTER: f64 = 478.0;
const BELT_COUNT: usize = 200;
const ASTEROID: AsteroidStyle = AsteroidStyle {
    mass: 1e-6,
    radius: 0.0005,
    color: Color::GRAY,
};

const DAY: f64 = 86_400.0;

/// Debris in solar units: asteroid-sized particles thrown off at 1-2 km/s
/// that last a month, with the density ladder counted per megametre of
/// merged radius
pub fn debris() -> DebrisConfig {
    let mut throttle = DebrisThrottle::default();
    for tier in &mut throttle.tiers {
        tier.factor *= 1_000.0;
    }
    throttle.saturated_factor *= 1_000.0;

    DebrisConfig {
        lifetime: 30.0 * DAY,
        mass: ASTEROID.mass,
        radius: ASTEROID.radius,
        speed_min: 1e-6,
        speed_max: 2e-6,
        surface_offset: 1.1,
        age_jitter: DAY,
        throttle,
    }
}

pub fn bodies(seed: u64) -> Result<Vec<Body>, EngineError> {
    let mut builder = SystemBuilder::new(GRAVITY, seed);
    let sun = builder
        .add(Body::massive(Point2::origin(), Vector2::zeros(), SUN_RADIUS, SUN_MASS, Color::YELLOW)?)
        .clone();

    let mut earth = None;
    for (i, planet) in PLANETS.iter().enumerate() {
        // Spread the planets around so they do not start in a line
        let angle = i as f64 * 2.399_963;
        let body = builder
            .orbit(
                &sun,
                polar(planet.distance, angle),
                planet.color,
                planet.radius,
                planet.mass,
                Direction::Prograde,
            )?
            .clone();
        if i == EARTH {
            earth = Some(body);
        }
    }

    if let Some(earth) = earth {
        builder.orbit(
            &earth,
            polar(MOON_DISTANCE, 0.0),
            Color::WHITE,
            MOON_RADIUS,
            MOON_MASS,
            Direction::Prograde,
        )?;
    }

    builder.belt(&sun, BELT_INNER, BELT_OUTER, BELT_COUNT, Direction::Prograde, ASTEROID)?;

    Ok(builder.finish())
}
