use nalgebra::{Point2, Vector2};

use crate::body::{Body, BodyId, BodyKind, Color};
use crate::population::{CommitSummary, Population};

fn massive(x: f64, mass: f64) -> Body {
    Body::massive(Point2::new(x, 0.0), Vector2::new(0.0, 1.0), 1.0, mass, Color::WHITE).unwrap()
}

#[test]
fn test_insert_assigns_increasing_ids() {
    let mut population = Population::new();
    let a = population.insert(massive(0.0, 1.0));
    let b = population.insert(massive(1.0, 1.0));

    assert_eq!(a, BodyId(0));
    assert_eq!(b, BodyId(1));
    assert_eq!(population.len(), 2);
    assert_eq!(population.get(b).unwrap().position.x, 1.0);
}

#[test]
fn test_staged_addition_waits_for_commit() {
    let mut population = Population::new();
    let id = population.stage_add(massive(0.0, 1.0));

    assert!(population.is_empty());
    assert!(population.get(id).is_none());
    assert_eq!(population.pending_additions().len(), 1);

    let summary = population.commit();
    assert_eq!(summary, CommitSummary { removed: 0, added: 1 });
    assert!(population.get(id).is_some());
    assert!(population.pending_additions().is_empty());
}

#[test]
fn test_staged_removal_waits_for_commit() {
    let mut population = Population::new();
    let id = population.insert(massive(0.0, 1.0));

    assert!(population.stage_remove(id));
    assert!(!population.stage_remove(id));
    assert!(population.is_staged_for_removal(id));
    assert_eq!(population.len(), 1);

    let summary = population.commit();
    assert_eq!(summary, CommitSummary { removed: 1, added: 0 });
    assert!(population.is_empty());
    assert!(!population.is_staged_for_removal(id));
}

#[test]
fn test_identical_bodies_remain_distinct() {
    let mut population = Population::new();
    let a = population.insert(massive(0.0, 1.0));
    let b = population.insert(massive(0.0, 1.0));

    population.stage_remove(a);
    population.commit();

    assert_eq!(population.len(), 1);
    assert_eq!(population.bodies()[0].id, b);
}

#[test]
fn test_clear_drops_staging_and_keeps_ids_unique() {
    let mut population = Population::new();
    let first = population.insert(massive(0.0, 1.0));
    population.stage_add(massive(1.0, 1.0));
    population.stage_remove(first);

    population.clear();
    assert!(population.is_empty());
    assert!(population.pending_additions().is_empty());
    assert!(population.pending_removals().is_empty());

    let next = population.insert(massive(2.0, 1.0));
    assert!(next > first);
}

#[test]
fn test_replace_loads_new_bodies() {
    let mut population = Population::new();
    population.insert(massive(0.0, 1.0));

    let ids = population.replace(vec![massive(5.0, 2.0), massive(6.0, 3.0)]);
    assert_eq!(ids.len(), 2);
    assert_eq!(population.len(), 2);
    assert_eq!(population.total_massive_mass(), 5.0);
}

#[test]
fn test_diagnostics() {
    let mut population = Population::new();
    population.insert(massive(0.0, 2.0));
    population.insert(
        Body::asteroid(Point2::origin(), Vector2::new(3.0, 0.0), 1.0, 1.0, Color::GRAY).unwrap(),
    );

    assert_eq!(population.total_massive_mass(), 2.0);
    assert_eq!(population.total_momentum(), Vector2::new(3.0, 2.0));
    assert_eq!(population.kinetic_energy(), 1.0 + 4.5);
    assert_eq!(population.count_kind(BodyKind::Asteroid), 1);
    assert_eq!(population.count_kind(BodyKind::Debris), 0);
}
