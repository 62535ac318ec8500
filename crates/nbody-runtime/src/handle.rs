//! Physics thread and the handle used to talk to it
//!
//! The physics loop runs on its own thread and owns the [`Simulation`]. The
//! outside world sends [`Command`]s over a channel and reads the most recent
//! [`WorldSnapshot`], which the loop republishes after every iteration.
//! Readers clone an `Arc`, so they never hold the lock while rendering.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, PoisonError, RwLock};
use std::thread::{self, JoinHandle};

use log::{debug, info, warn};
use nalgebra::{Point2, Vector2};

use nbody::body::{Body, BodyId, Color};
use nbody::population::SpeedRange;
use nbody::snapshot::{BodySnapshot, WorldSnapshot};

use crate::clock::Clock;
use crate::command::Command;
use crate::config::RuntimeConfig;
use crate::error::SimulationError;
use crate::simulation::Simulation;

type SharedSnapshot = Arc<RwLock<Arc<WorldSnapshot>>>;

fn read_shared(shared: &SharedSnapshot) -> Arc<WorldSnapshot> {
    shared
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

fn publish(shared: &SharedSnapshot, snapshot: WorldSnapshot) {
    *shared.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(snapshot);
}

/// Read-only access to the latest published snapshot
#[derive(Debug, Clone)]
pub struct SnapshotReader {
    shared: SharedSnapshot,
}

impl SnapshotReader {
    pub fn snapshot(&self) -> Arc<WorldSnapshot> {
        read_shared(&self.shared)
    }
}

/// Owner of a running physics thread
///
/// Dropping the handle closes the command channel and joins the thread.
#[derive(Debug)]
pub struct SimulationHandle {
    commands: Option<Sender<Command>>,
    shared: SharedSnapshot,
    thread: Option<JoinHandle<()>>,
}

impl SimulationHandle {
    /// Builds the configured preset and starts the physics loop
    ///
    /// Configuration and generation errors are returned here, before any
    /// thread is started.
    pub fn spawn(config: RuntimeConfig) -> Result<Self, SimulationError> {
        let simulation = Simulation::new(&config)?;
        let shared: SharedSnapshot = Arc::new(RwLock::new(Arc::new(simulation.snapshot())));
        let (tx, rx) = mpsc::channel();
        let clock = Clock::from_config(&config);

        let loop_shared = Arc::clone(&shared);
        let thread = thread::Builder::new()
            .name("physics".to_string())
            .spawn(move || run(simulation, clock, rx, loop_shared))?;

        Ok(Self {
            commands: Some(tx),
            shared,
            thread: Some(thread),
        })
    }

    fn send(&self, command: Command) -> Result<(), SimulationError> {
        self.commands
            .as_ref()
            .ok_or(SimulationError::Disconnected)?
            .send(command)
            .map_err(|_| SimulationError::Disconnected)
    }

    /// Adds a massive body at the start of the next step
    ///
    /// Mass and radius are checked here, so an invalid body is reported to
    /// the caller instead of the physics thread.
    pub fn spawn_body(
        &self,
        position: Point2<f64>,
        velocity: Vector2<f64>,
        radius: f64,
        mass: f64,
        color: Color,
    ) -> Result<(), SimulationError> {
        let body = Body::massive(position, velocity, radius, mass, color)?;
        self.send(Command::Spawn(body))
    }

    pub fn spawn_debris_burst(
        &self,
        position: Point2<f64>,
        count: usize,
        speed: SpeedRange,
        color: Color,
    ) -> Result<(), SimulationError> {
        speed.validate()?;
        self.send(Command::SpawnDebrisBurst {
            position,
            count,
            speed,
            color,
        })
    }

    pub fn set_focus(&self, id: Option<BodyId>) -> Result<(), SimulationError> {
        self.send(Command::SetFocus(id))
    }

    /// Requests a fresh system from a preset; unknown names are ignored
    pub fn regenerate(&self, preset: &str) -> Result<(), SimulationError> {
        self.send(Command::Regenerate(preset.to_string()))
    }

    /// Latest published state of the world
    pub fn snapshot(&self) -> Arc<WorldSnapshot> {
        read_shared(&self.shared)
    }

    /// Body nearest to `point` in the latest snapshot
    pub fn nearest_body_to(&self, point: Point2<f64>) -> Result<BodySnapshot, SimulationError> {
        let snapshot = self.snapshot();
        Ok(snapshot.nearest_body_to(point)?.clone())
    }

    pub fn reader(&self) -> SnapshotReader {
        SnapshotReader {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Whether the physics thread is still running
    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for SimulationHandle {
    fn drop(&mut self) {
        self.commands.take();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("physics thread panicked");
            }
        }
    }
}

fn run(mut simulation: Simulation, mut clock: Clock, commands: Receiver<Command>, shared: SharedSnapshot) {
    info!("physics loop started with preset {}", simulation.preset());
    loop {
        loop {
            match commands.try_recv() {
                Ok(command) => {
                    debug!("applying {:?}", command);
                    if let Err(e) = simulation.apply(command) {
                        warn!("command failed: {}", e);
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    info!("physics loop stopped after {} steps", simulation.state().steps);
                    return;
                }
            }
        }

        // Scale by the multiplier of whatever preset the commands left loaded
        let dt = clock.tick(simulation.time_multiplier());
        if let Err(e) = simulation.advance(dt) {
            warn!("step failed: {}", e);
        }
        publish(&shared, simulation.snapshot());
        clock.throttle();
    }
}
