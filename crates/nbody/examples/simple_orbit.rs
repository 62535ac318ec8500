//! Single light body orbiting a heavy one
//!
//! Shows how well semi-implicit Euler holds a circular orbit and how energy
//! drifts over several periods.
//!
//! Run with: cargo run --package nbody --example simple_orbit

use nalgebra::{Point2, Vector2};
use nbody::body::{Body, Color};
use nbody::config::EngineConfig;
use nbody::state::SystemState;

fn main() -> Result<(), nbody::EngineError> {
    println!("Semi-implicit Euler: single orbit\n");
    println!("{}", "=".repeat(60));

    let mut system = SystemState::new(EngineConfig::default(), 0)?;

    let sun_mass = 1000.0;
    let r = 10.0;
    let v_circular = (system.gravity() * sun_mass / r).sqrt();

    system.insert(Body::massive(Point2::origin(), Vector2::zeros(), 1.0, sun_mass, Color::YELLOW)?);
    let moon = system.insert(Body::massive(
        Point2::new(r, 0.0),
        Vector2::new(0.0, v_circular),
        0.5,
        1.0,
        Color::SKY_BLUE,
    )?);

    let initial_energy = system.total_energy();
    println!("  Orbital radius: {:.3}", r);
    println!("  Circular velocity: {:.3}", v_circular);
    println!("  Initial energy: {:.6e}", initial_energy);

    let period = 2.0 * std::f64::consts::PI * r / v_circular;
    let steps_per_orbit = 2000;
    let dt = period / steps_per_orbit as f64;
    let n_orbits = 5;

    println!("\nIntegrating {} orbits at dt = {:.6}...\n", n_orbits, dt);

    for orbit in 1..=n_orbits {
        for _ in 0..steps_per_orbit {
            system.step(dt)?;
        }
        let Some(body) = system.get_body(moon) else {
            println!("Moon was lost after {:.2} time units", system.time);
            return Ok(());
        };
        let sun = system.bodies()[0].position;
        let separation = (body.position - sun).magnitude();
        let energy_error = ((system.total_energy() - initial_energy) / initial_energy).abs();
        println!(
            "Orbit {}: separation={:.5}, dE={:.2e}, trail samples={}",
            orbit,
            separation,
            energy_error,
            body.trajectory().map(|t| t.sample_count()).unwrap_or(0)
        );
    }

    println!("\n{}", "=".repeat(60));
    println!("Done after {} steps ({:.2} time units)", system.steps, system.time);
    Ok(())
}
