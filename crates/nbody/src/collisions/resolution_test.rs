use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::body::{Body, BodyId, BodyKind, Color};
use crate::collisions::detection::{detect_collisions, CollisionEvent};
use crate::collisions::resolution::{merge_bodies, resolve_collisions, ResolutionSummary};
use crate::config::EngineConfig;
use crate::population::Population;

fn massive(x: f64, vx: f64, radius: f64, mass: f64, color: Color) -> Body {
    Body::massive(Point2::new(x, 0.0), Vector2::new(vx, 0.0), radius, mass, color).unwrap()
}

fn resolve(population: &mut Population) -> ResolutionSummary {
    let events = detect_collisions(population.bodies(), population.pending_removals());
    let mut rng = ChaChaRng::seed_from_u64(42);
    resolve_collisions(population, events, &EngineConfig::default(), &mut rng).unwrap()
}

#[test]
fn test_merge_conserves_mass_and_momentum() {
    let a = Body::massive(Point2::new(1.0, 0.0), Vector2::new(0.0, 5.0), 0.3, 3.0, Color::RED).unwrap();
    let b = Body::massive(Point2::new(1.1, 0.2), Vector2::new(2.0, -3.0), 0.4, 1.0, Color::WHITE)
        .unwrap();

    let merged = merge_bodies(&a, &b, 10).unwrap();

    assert_relative_eq!(merged.mass(), 4.0);
    let p_initial = a.momentum() + b.momentum();
    assert_relative_eq!(merged.momentum().x, p_initial.x, epsilon = 1e-12);
    assert_relative_eq!(merged.momentum().y, p_initial.y, epsilon = 1e-12);
    assert_relative_eq!(merged.radius(), 0.5, epsilon = 1e-12);
    assert_relative_eq!(merged.position.x, 1.025, epsilon = 1e-12);
    assert_relative_eq!(merged.position.y, 0.05, epsilon = 1e-12);
    assert_eq!(merged.kind(), BodyKind::Massive);
    assert_eq!(merged.age, 0.0);
    assert_eq!(merged.trajectory().unwrap().capacity(), 10);
}

#[test]
fn test_merge_color_leans_to_heavier() {
    let black = Color::rgb(0, 0, 0);
    let heavy = massive(0.0, 0.0, 1.0, 10.0, Color::WHITE);
    let light = massive(0.0, 0.0, 1.0, 5.0, black);

    // Heavier first: full weight on the first body's color
    assert_eq!(merge_bodies(&heavy, &light, 1).unwrap().color, Color::WHITE);
    // Lighter first: blend from the heavy color by m_light / m_heavy
    assert_eq!(merge_bodies(&light, &heavy, 1).unwrap().color, Color::rgb(128, 128, 128));
}

#[test]
fn test_massive_absorbs_asteroid_and_debris() {
    let mut population = Population::new();
    let sun = population.insert(massive(0.0, 0.0, 10.0, 100.0, Color::YELLOW));
    let rock = population.insert(
        Body::asteroid(Point2::new(5.0, 0.0), Vector2::zeros(), 1.0, 0.1, Color::GRAY).unwrap(),
    );
    let dust = population.insert(
        Body::debris(Point2::new(-5.0, 0.0), Vector2::zeros(), 1.0, 10.0, Color::RED).unwrap(),
    );

    let summary = resolve(&mut population);

    assert_eq!(summary.absorbed, 2);
    assert_eq!(summary.merges, 0);
    assert!(population.is_staged_for_removal(rock));
    assert!(population.is_staged_for_removal(dust));
    assert!(!population.is_staged_for_removal(sun));

    population.commit();
    assert_eq!(population.len(), 1);
    assert_eq!(population.get(sun).unwrap().mass(), 100.0);
}

#[test]
fn test_massive_pair_merges_with_debris() {
    let mut population = Population::new();
    let a = population.insert(massive(0.0, 1.0, 3.0, 30.0, Color::RED));
    let b = population.insert(massive(4.0, -1.0, 4.0, 10.0, Color::WHITE));

    let summary = resolve(&mut population);

    // Merged radius 5, factor 4 at this population
    assert_eq!(summary.merges, 1);
    assert_eq!(summary.debris_spawned, 20);
    assert!(population.is_staged_for_removal(a));
    assert!(population.is_staged_for_removal(b));
    assert_eq!(population.pending_additions().len(), 21);

    population.commit();
    let merged: Vec<&Body> = population.bodies().iter().filter(|b| b.is_massive()).collect();
    assert_eq!(merged.len(), 1);
    assert_relative_eq!(merged[0].mass(), 40.0);
    assert_relative_eq!(merged[0].velocity.x, 0.5, epsilon = 1e-12);
    assert_relative_eq!(merged[0].position.x, 1.0, epsilon = 1e-12);
    assert_eq!(population.count_kind(BodyKind::Debris), 20);
}

#[test]
fn test_closest_contact_wins() {
    // b touches both a and c; b-c is the closer pair and is resolved first
    let mut population = Population::new();
    let a = population.insert(massive(0.0, 0.0, 2.0, 1.0, Color::WHITE));
    let b = population.insert(massive(3.5, 0.0, 2.0, 1.0, Color::WHITE));
    let c = population.insert(massive(5.0, 0.0, 2.0, 1.0, Color::WHITE));

    let summary = resolve(&mut population);

    assert_eq!(summary.merges, 1);
    assert!(!population.is_staged_for_removal(a));
    assert!(population.is_staged_for_removal(b));
    assert!(population.is_staged_for_removal(c));
}

#[test]
fn test_staged_bodies_are_skipped() {
    let mut population = Population::new();
    population.insert(massive(0.0, 0.0, 2.0, 1.0, Color::WHITE));
    let b = population.insert(massive(1.0, 0.0, 2.0, 1.0, Color::WHITE));
    let events = detect_collisions(population.bodies(), population.pending_removals());
    population.stage_remove(b);

    let mut rng = ChaChaRng::seed_from_u64(1);
    let summary =
        resolve_collisions(&mut population, events, &EngineConfig::default(), &mut rng).unwrap();

    assert_eq!(summary.merges, 0);
    assert!(population.pending_additions().is_empty());
}

#[test]
fn test_ids_of_unknown_bodies_are_ignored() {
    let mut population = Population::new();
    population.insert(massive(0.0, 0.0, 2.0, 1.0, Color::WHITE));
    let event = CollisionEvent {
        body_a: BodyId(0),
        body_b: BodyId(99),
        separation: 0.0,
        collision_radius: 1.0,
    };
    let mut rng = ChaChaRng::seed_from_u64(1);
    let summary =
        resolve_collisions(&mut population, vec![event], &EngineConfig::default(), &mut rng)
            .unwrap();
    assert_eq!(summary, ResolutionSummary::default());
}

#[test]
fn test_merge_saturates_overflowing_mass() {
    let a = Body::massive(Point2::new(-1.0, 0.0), Vector2::new(2.0, 0.0), 3.0, 1e308, Color::RED).unwrap();
    let b = Body::massive(Point2::new(1.0, 0.0), Vector2::new(-2.0, 4.0), 4.0, 1e308, Color::WHITE).unwrap();

    let merged = merge_bodies(&a, &b, 10).unwrap();
    assert_eq!(merged.mass(), f64::MAX);
    assert_relative_eq!(merged.radius(), 5.0);
    assert!(merged.position.coords.iter().all(|c| c.is_finite()));
    assert!(merged.velocity.iter().all(|c| c.is_finite()));
    assert!(merged.velocity.y > 0.0);
}
