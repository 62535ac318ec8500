use nalgebra::{Point2, Vector2};

use crate::body::{Body, BodyId, BodyKind, Color};
use crate::error::EngineError;
use crate::snapshot::{BodySnapshot, TrailSnapshot, WorldSnapshot};

#[test]
fn test_body_snapshot_copies_state() {
    let mut body =
        Body::massive(Point2::new(1.0, 2.0), Vector2::new(3.0, 4.0), 5.0, 6.0, Color::TAN).unwrap();
    body.id = BodyId(9);
    body.age = 1.5;

    let snap = BodySnapshot::from(&body);
    assert_eq!(snap.id, BodyId(9));
    assert_eq!(snap.kind, BodyKind::Massive);
    assert_eq!(snap.position, [1.0, 2.0]);
    assert_eq!(snap.velocity, [3.0, 4.0]);
    assert_eq!(snap.radius, 5.0);
    assert_eq!(snap.mass, 6.0);
    assert_eq!(snap.color, Color::TAN);
    assert_eq!(snap.age, 1.5);
    assert_eq!(snap.trail.as_ref().map(|t| t.points.len()), Some(1000));
}

#[test]
fn test_non_massive_snapshot_has_no_trail() {
    let body = Body::debris(Point2::origin(), Vector2::zeros(), 1.0, 1.0, Color::RED).unwrap();
    assert!(BodySnapshot::from(&body).trail.is_none());
}

#[test]
fn test_trail_order_before_wrap() {
    let trail = TrailSnapshot {
        points: vec![[0.0, 0.0], [1.0, 0.0], [9.0, 9.0]],
        cursor: 1,
        wrapped: false,
    };
    let xs: Vec<f64> = trail.iter_ordered().map(|p| p[0]).collect();
    assert_eq!(xs, vec![0.0, 1.0]);
}

#[test]
fn test_nearest_body_in_snapshot() {
    let bodies: Vec<BodySnapshot> = [(0.0, 0.0), (10.0, 0.0), (0.0, 3.0)]
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            let mut b =
                Body::asteroid(Point2::new(x, y), Vector2::zeros(), 1.0, 1.0, Color::GRAY).unwrap();
            b.id = BodyId(i as u64);
            BodySnapshot::from(&b)
        })
        .collect();
    let world = WorldSnapshot {
        bodies,
        ..WorldSnapshot::empty()
    };

    assert_eq!(world.nearest_body_to(Point2::new(0.0, 2.0)).unwrap().id, BodyId(2));
    assert_eq!(world.nearest_body_to(Point2::new(8.0, 1.0)).unwrap().id, BodyId(1));
    assert_eq!(world.count_kind(BodyKind::Asteroid), 3);
}

#[test]
fn test_nearest_body_in_empty_snapshot() {
    let world = WorldSnapshot::empty();
    assert_eq!(
        world.nearest_body_to(Point2::origin()).unwrap_err(),
        EngineError::EmptyPopulation
    );
}

#[test]
fn test_snapshot_serializes_camel_case() {
    let body = Body::asteroid(Point2::origin(), Vector2::zeros(), 1.0, 1.0, Color::GRAY).unwrap();
    let world = WorldSnapshot {
        time_multiplier: 2.0,
        bodies: vec![BodySnapshot::from(&body)],
        ..WorldSnapshot::empty()
    };
    let json = serde_json::to_value(&world).unwrap();

    assert_eq!(json["timeMultiplier"], 2.0);
    assert_eq!(json["bodies"][0]["kind"], "asteroid");
    assert!(json["bodies"][0].get("trail").is_none());
}
