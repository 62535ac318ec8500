//! Head-on merger of two massive bodies
//!
//! Two bodies fall towards each other, merge, and shed debris that expires
//! after its lifetime.
//!
//! Run with: cargo run --package nbody --example collision_demo

use nalgebra::{Point2, Vector2};
use nbody::body::{Body, BodyKind, Color};
use nbody::config::EngineConfig;
use nbody::state::SystemState;

fn main() -> Result<(), nbody::EngineError> {
    println!("Merger demo\n");
    println!("{}", "=".repeat(60));

    let mut system = SystemState::new(EngineConfig::default(), 42)?;
    system.insert(Body::massive(
        Point2::new(-100.0, 0.0),
        Vector2::new(20.0, 5.0),
        8.0,
        5_000.0,
        Color::RED,
    )?);
    system.insert(Body::massive(
        Point2::new(100.0, 0.0),
        Vector2::new(-20.0, -5.0),
        6.0,
        3_000.0,
        Color::CORNFLOWER_BLUE,
    )?);

    let initial_momentum = system.total_momentum();
    println!("Initial massive mass: {:.1}", system.total_massive_mass());

    let dt = 0.01;
    let total_steps = 2_000;

    for _ in 0..total_steps {
        let report = system.step(dt)?;
        if report.merges > 0 {
            println!(
                "t={:6.2}: {} merger(s), {} debris spawned",
                system.time, report.merges, report.debris_spawned
            );
        }
        if report.expired > 0 {
            println!("t={:6.2}: {} debris expired", system.time, report.expired);
        }
    }

    let population = system.population();
    println!("\n{}", "=".repeat(60));
    println!("Final time: {:.2}", system.time);
    println!("Massive bodies: {}", population.count_kind(BodyKind::Massive));
    println!("Debris: {}", population.count_kind(BodyKind::Debris));
    println!("Massive mass: {:.1}", system.total_massive_mass());
    println!(
        "Momentum change: {:.3e}",
        (system.total_momentum() - initial_momentum).magnitude()
    );
    Ok(())
}
