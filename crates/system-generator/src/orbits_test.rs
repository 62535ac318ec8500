use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use nbody::body::{Body, BodyKind, Color};

use crate::orbits::{
    anchor_point, asteroid_belt, circular_orbit, circular_velocity, polar, AsteroidStyle,
    Direction,
};

fn sun() -> Body {
    Body::massive(Point2::new(5.0, -5.0), Vector2::new(1.0, 2.0), 10.0, 1000.0, Color::YELLOW)
        .unwrap()
}

#[test]
fn test_direction_sign() {
    assert_eq!(Direction::Prograde.sign(), 1.0);
    assert_eq!(Direction::Retrograde.sign(), -1.0);
}

#[test]
fn test_circular_orbit_placement() {
    let anchor = sun();
    let body = circular_orbit(
        &anchor,
        Vector2::new(0.0, 40.0),
        Color::RED,
        2.0,
        3.0,
        Direction::Prograde,
        1.0,
    )
    .unwrap();

    assert_eq!(body.kind(), BodyKind::Massive);
    assert_eq!(body.position, Point2::new(5.0, 35.0));
    assert_eq!(body.mass(), 3.0);
    assert_eq!(body.radius(), 2.0);

    // Tangential speed sqrt(1000 / 40) = 5, rotated +90° from +y is -x
    let relative = body.velocity - anchor.velocity;
    assert_relative_eq!(relative.x, -5.0, epsilon = 1e-12);
    assert_relative_eq!(relative.y, 0.0, epsilon = 1e-12);
}

#[test]
fn test_retrograde_reverses_velocity() {
    let anchor = sun();
    let offset = Vector2::new(30.0, -40.0);
    let pro = circular_velocity(&anchor, offset, 1.0, Direction::Prograde) - anchor.velocity;
    let retro = circular_velocity(&anchor, offset, 1.0, Direction::Retrograde) - anchor.velocity;

    assert_relative_eq!(pro.x, -retro.x, epsilon = 1e-12);
    assert_relative_eq!(pro.y, -retro.y, epsilon = 1e-12);
    assert_relative_eq!(pro.dot(&offset), 0.0, epsilon = 1e-9);
}

#[test]
fn test_gravity_scales_speed() {
    let anchor = anchor_point(Point2::origin(), Vector2::zeros(), 100.0).unwrap();
    let offset = Vector2::new(25.0, 0.0);
    let v1 = circular_velocity(&anchor, offset, 1.0, Direction::Prograde);
    let v4 = circular_velocity(&anchor, offset, 4.0, Direction::Prograde);
    assert_relative_eq!(v4.y, 2.0 * v1.y, epsilon = 1e-12);
}

#[test]
fn test_zero_offset_keeps_anchor_velocity() {
    let anchor = sun();
    assert_eq!(
        circular_velocity(&anchor, Vector2::zeros(), 1.0, Direction::Prograde),
        anchor.velocity
    );
}

#[test]
fn test_orbit_rejects_bad_mass() {
    let result = circular_orbit(
        &sun(),
        Vector2::new(10.0, 0.0),
        Color::RED,
        1.0,
        0.0,
        Direction::Prograde,
        1.0,
    );
    assert!(result.is_err());
}

#[test]
fn test_asteroid_belt_within_band() {
    let anchor = sun();
    let mut rng = ChaChaRng::seed_from_u64(42);
    let style = AsteroidStyle::default();
    let belt =
        asteroid_belt(&mut rng, 100.0, 120.0, 200, &anchor, Direction::Prograde, 1.0, style).unwrap();

    assert_eq!(belt.len(), 200);
    for rock in &belt {
        assert_eq!(rock.kind(), BodyKind::Asteroid);
        assert_eq!(rock.mass(), style.mass);
        assert_eq!(rock.radius(), style.radius);
        assert!(rock.trajectory().is_none());

        let offset = rock.position - anchor.position;
        let r = offset.magnitude();
        assert!((100.0 - 1e-9..=120.0 + 1e-9).contains(&r), "r = {}", r);

        let relative = rock.velocity - anchor.velocity;
        assert_relative_eq!(relative.magnitude(), (1000.0 / r).sqrt(), epsilon = 1e-9);
        assert_relative_eq!(relative.dot(&offset), 0.0, epsilon = 1e-6);
    }
}

#[test]
fn test_asteroid_belt_is_reproducible() {
    let anchor = sun();
    let style = AsteroidStyle::default();
    let a = asteroid_belt(
        &mut ChaChaRng::seed_from_u64(3),
        10.0,
        20.0,
        5,
        &anchor,
        Direction::Retrograde,
        1.0,
        style,
    )
    .unwrap();
    let b = asteroid_belt(
        &mut ChaChaRng::seed_from_u64(3),
        10.0,
        20.0,
        5,
        &anchor,
        Direction::Retrograde,
        1.0,
        style,
    )
    .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_asteroid_belt_rejects_bad_band() {
    let mut rng = ChaChaRng::seed_from_u64(3);
    let style = AsteroidStyle::default();
    let result =
        asteroid_belt(&mut rng, -5.0, 20.0, 5, &sun(), Direction::Prograde, 1.0, style);
    assert!(result.is_err());
}

#[test]
fn test_polar() {
    let v = polar(2.0, std::f64::consts::FRAC_PI_2);
    assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(v.y, 2.0, epsilon = 1e-12);
}
