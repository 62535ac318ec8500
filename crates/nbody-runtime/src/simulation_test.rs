use nalgebra::{Point2, Vector2};

use nbody::body::{Body, BodyKind, Color};
use nbody::population::SpeedRange;

use crate::command::Command;
use crate::config::RuntimeConfig;
use crate::error::SimulationError;
use crate::simulation::Simulation;
use system_generator::Preset;

fn config(preset: &str) -> RuntimeConfig {
    RuntimeConfig {
        preset: preset.to_string(),
        seed: Some(11),
        ..RuntimeConfig::default()
    }
}

#[test]
fn test_new_loads_preset() {
    let sim = Simulation::new(&config("binary")).unwrap();
    let snapshot = sim.snapshot();
    assert_eq!(snapshot.bodies.len(), 5);
    assert_eq!(snapshot.gravity, 1.0);
    assert_eq!(snapshot.time_multiplier, 1.0);
    assert_eq!(snapshot.steps, 0);
    assert_eq!(sim.seed(), 11);
}

#[test]
fn test_new_rejects_unknown_preset() {
    let result = Simulation::new(&config("andromeda"));
    assert!(matches!(result, Err(SimulationError::UnknownPreset(_))));
}

#[test]
fn test_snapshot_carries_time_multiplier() {
    let sim = Simulation::new(&config("solar-fast")).unwrap();
    assert_eq!(sim.snapshot().time_multiplier, 30.0 * 86_400.0);
}

#[test]
fn test_regenerate_unknown_is_noop() {
    let mut sim = Simulation::new(&config("binary")).unwrap();
    sim.advance(0.01).unwrap();
    let before = sim.snapshot();

    assert!(!sim.regenerate("nope").unwrap());
    assert_eq!(sim.snapshot(), before);
    assert_eq!(sim.preset().name(), "binary");
}

#[test]
fn test_regenerate_replaces_system() {
    let mut sim = Simulation::new(&config("binary")).unwrap();
    sim.advance(0.01).unwrap();

    assert!(sim.regenerate("classic").unwrap());
    let snapshot = sim.snapshot();
    assert_eq!(snapshot.bodies.len(), 6);
    assert_eq!(snapshot.gravity, 30.0);
    assert_eq!(snapshot.time, 0.0);
    assert_eq!(snapshot.steps, 0);
    assert!(snapshot.focus.is_none());
}

#[test]
fn test_regenerate_through_command() {
    let mut sim = Simulation::new(&config("binary")).unwrap();
    sim.apply(Command::Regenerate("figure-eight".to_string())).unwrap();
    assert_eq!(sim.snapshot().bodies.len(), 3);
    assert_eq!(sim.time_multiplier(), 2.0);

    // Unknown names are not an error
    sim.apply(Command::Regenerate("nope".to_string())).unwrap();
    assert_eq!(sim.snapshot().bodies.len(), 3);
}

#[test]
fn test_spawn_waits_for_next_step() {
    let mut sim = Simulation::new(&config("binary")).unwrap();
    let body = Body::massive(
        Point2::new(5_000.0, 0.0),
        Vector2::zeros(),
        3.0,
        1.0,
        Color::WHITE,
    )
    .unwrap();

    sim.apply(Command::Spawn(body)).unwrap();
    assert_eq!(sim.snapshot().bodies.len(), 5);

    sim.advance(0.01).unwrap();
    let snapshot = sim.snapshot();
    assert_eq!(snapshot.bodies.len(), 6);
    let spawned = snapshot.nearest_body_to(Point2::new(5_000.0, 0.0)).unwrap();
    assert_eq!(spawned.radius, 3.0);
    assert!(spawned.trail.is_some());
}

#[test]
fn test_debris_burst_command() {
    let mut sim = Simulation::new(&config("binary")).unwrap();
    sim.apply(Command::SpawnDebrisBurst {
        position: Point2::new(0.0, 3_000.0),
        count: 12,
        speed: SpeedRange::new(1.0, 2.0),
        color: Color::RED,
    })
    .unwrap();
    sim.advance(0.01).unwrap();
    assert_eq!(sim.snapshot().count_kind(BodyKind::Debris), 12);
}

#[test]
fn test_invalid_debris_burst_is_an_error() {
    let mut sim = Simulation::new(&config("binary")).unwrap();
    let result = sim.apply(Command::SpawnDebrisBurst {
        position: Point2::origin(),
        count: 3,
        speed: SpeedRange::new(-1.0, 2.0),
        color: Color::RED,
    });
    assert!(matches!(result, Err(SimulationError::Engine(_))));
}

#[test]
fn test_set_focus_command() {
    let mut sim = Simulation::new(&config("binary")).unwrap();
    let id = sim.state().bodies()[0].id;
    sim.apply(Command::SetFocus(Some(id))).unwrap();

    let focus = sim.snapshot().focus.unwrap();
    assert_eq!(focus.id, id);

    sim.apply(Command::SetFocus(None)).unwrap();
    assert!(sim.snapshot().focus.is_none());
}

#[test]
fn test_advance_skips_empty_slices() {
    let mut sim = Simulation::new(&config("binary")).unwrap();
    assert!(sim.advance(0.0).unwrap().is_none());
    assert_eq!(sim.state().steps, 0);

    let report = sim.advance(0.02).unwrap().unwrap();
    assert_eq!(report.dt, 0.02);
    assert_eq!(sim.state().steps, 1);
}

#[test]
fn test_solar_presets_bring_their_own_debris() {
    let mut sim = Simulation::new(&config("solar-fast")).unwrap();
    let solar = sim.state().config().debris.clone();
    assert_eq!(Some(solar.clone()), Preset::SolarFast.debris());
    assert!(solar.radius < 0.696);

    // Back to an engine-unit preset: the configured debris returns
    sim.regenerate("binary").unwrap();
    assert_eq!(sim.state().config().debris, RuntimeConfig::default().engine.debris);

    sim.regenerate("solar-realistic").unwrap();
    assert_eq!(sim.state().config().debris, solar);
}
