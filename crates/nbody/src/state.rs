use log::{debug, info};
use nalgebra::{Point2, Vector2};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::body::{Body, BodyId, BodyKind, Color};
use crate::collisions::{detect_collisions, resolve_collisions};
use crate::config::{DebrisConfig, EngineConfig};
use crate::error::EngineError;
use crate::forces::{ForceModel, PairwiseGravity};
use crate::integrator::SemiImplicitEuler;
use crate::population::{debris_burst, Population, SpeedRange};
use crate::snapshot::{BodySnapshot, FocusSnapshot, WorldSnapshot};

/// Counters describing one call to [`SystemState::step`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepReport {
    pub dt: f64,
    pub merges: usize,
    pub absorbed: usize,
    /// Debris staged for removal because it outlived its lifetime
    pub expired: usize,
    pub debris_spawned: usize,
    /// Bodies that joined the live store during the step (both commits)
    pub added: usize,
    /// Bodies that left the live store during the step (both commits)
    pub removed: usize,
}

/// Complete state of a simulated system
///
/// Owns the population, the physics settings and the random stream used for
/// debris. Everything that changes the population from outside a step is
/// staged and becomes live at the start of the next [`step`](Self::step).
#[derive(Debug, Clone)]
pub struct SystemState {
    /// Virtual seconds simulated so far
    pub time: f64,
    /// Completed steps
    pub steps: u64,
    population: Population,
    config: EngineConfig,
    gravity: PairwiseGravity,
    integrator: SemiImplicitEuler,
    rng: ChaChaRng,
    focus: Option<BodyId>,
}

impl SystemState {
    /// Creates an empty system
    ///
    /// The seed drives every random draw the engine makes (debris directions,
    /// speeds and ages), so two systems built with the same seed and fed the
    /// same commands evolve identically.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::config::EngineConfig;
    /// use nbody::state::SystemState;
    ///
    /// let system = SystemState::new(EngineConfig::default(), 42).unwrap();
    ///
    /// assert_eq!(system.body_count(), 0);
    /// assert_eq!(system.time, 0.0);
    /// ```
    pub fn new(config: EngineConfig, seed: u64) -> Result<Self, EngineError> {
        config.validate()?;
        let gravity = PairwiseGravity::with_min_separation(config.gravity, config.min_separation);
        Ok(Self {
            time: 0.0,
            steps: 0,
            population: Population::new(),
            config,
            gravity,
            integrator: SemiImplicitEuler,
            rng: ChaChaRng::seed_from_u64(seed),
            focus: None,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn bodies(&self) -> &[Body] {
        self.population.bodies()
    }

    pub fn get_body(&self, id: BodyId) -> Option<&Body> {
        self.population.get(id)
    }

    pub fn body_count(&self) -> usize {
        self.population.len()
    }

    pub fn gravity(&self) -> f64 {
        self.gravity.gravity
    }

    /// Changes `G` for every following step
    pub fn set_gravity(&mut self, gravity: f64) -> Result<(), EngineError> {
        if !gravity.is_finite() {
            return Err(EngineError::InvalidConfig(format!(
                "gravity must be finite, got {}",
                gravity
            )));
        }
        self.config.gravity = gravity;
        self.gravity.gravity = gravity;
        Ok(())
    }

    /// Replaces the debris settings used by later merges and bursts
    ///
    /// Debris already in the population keeps its mass and radius but expires
    /// by the new lifetime.
    pub fn set_debris_config(&mut self, debris: DebrisConfig) -> Result<(), EngineError> {
        debris.validate()?;
        self.config.debris = debris;
        Ok(())
    }

    /// Adds a body to the live store right away
    ///
    /// For loading generated systems between steps; user commands go through
    /// [`spawn`](Self::spawn) and friends.
    pub fn insert(&mut self, body: Body) -> BodyId {
        self.population
            .insert(body.with_trail_capacity(self.config.trail.capacity))
    }

    /// Clears everything, including staged changes and focus, and loads
    /// `bodies` as the new live store
    pub fn replace_bodies(&mut self, bodies: impl IntoIterator<Item = Body>) -> Vec<BodyId> {
        self.focus = None;
        let capacity = self.config.trail.capacity;
        let ids = self
            .population
            .replace(bodies.into_iter().map(|b| b.with_trail_capacity(capacity)));
        info!("loaded {} bodies", ids.len());
        ids
    }

    /// Drops every body and resets the clock
    pub fn clear(&mut self) {
        self.population.clear();
        self.focus = None;
        self.time = 0.0;
        self.steps = 0;
    }

    /// Stages a new massive body for the next step boundary
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::Color;
    /// use nbody::config::EngineConfig;
    /// use nbody::state::SystemState;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let mut system = SystemState::new(EngineConfig::default(), 7).unwrap();
    /// let id = system
    ///     .spawn(Point2::new(5.0, 5.0), Vector2::zeros(), 2.0, 40.0, Color::TAN)
    ///     .unwrap();
    ///
    /// // Not live until the next step begins
    /// assert!(system.get_body(id).is_none());
    /// system.step(0.01).unwrap();
    /// assert!(system.get_body(id).is_some());
    ///
    /// assert!(system
    ///     .spawn(Point2::origin(), Vector2::zeros(), 1.0, -1.0, Color::TAN)
    ///     .is_err());
    /// ```
    pub fn spawn(
        &mut self,
        position: Point2<f64>,
        velocity: Vector2<f64>,
        radius: f64,
        mass: f64,
        color: Color,
    ) -> Result<BodyId, EngineError> {
        let body = Body::massive_with_trail(
            position,
            velocity,
            radius,
            mass,
            color,
            self.config.trail.capacity,
        )?;
        Ok(self.population.stage_add(body))
    }

    /// Stages an already constructed body for the next step boundary
    pub fn stage_body(&mut self, body: Body) -> BodyId {
        self.population
            .stage_add(body.with_trail_capacity(self.config.trail.capacity))
    }

    /// Stages `count` debris particles flying out of `position`
    pub fn spawn_debris_burst(
        &mut self,
        position: Point2<f64>,
        count: usize,
        speed: SpeedRange,
        color: Color,
    ) -> Result<Vec<BodyId>, EngineError> {
        let particles = debris_burst(position, count, speed, color, &self.config.debris, &mut self.rng)?;
        Ok(particles
            .into_iter()
            .map(|p| self.population.stage_add(p))
            .collect())
    }

    pub fn focus(&self) -> Option<BodyId> {
        self.focus
    }

    /// Follows a body; the focus clears once the body leaves the population
    pub fn set_focus(&mut self, id: Option<BodyId>) {
        self.focus = id;
    }

    pub fn focus_position(&self) -> Option<Point2<f64>> {
        self.focus
            .and_then(|id| self.population.get(id))
            .map(|b| b.position)
    }

    /// Live body closest to `point`
    ///
    /// Ties resolve to the body earliest in the live store.
    pub fn nearest_body_to(&self, point: Point2<f64>) -> Result<&Body, EngineError> {
        self.population
            .bodies()
            .iter()
            .map(|b| ((b.position - point).magnitude_squared(), b))
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, b)| b)
            .ok_or(EngineError::EmptyPopulation)
    }

    /// Advance the system by `dt` virtual seconds
    ///
    /// 1. Commit changes staged since the previous step
    /// 2. Age every body and stage expired debris for removal
    /// 3. Integrate every body not staged for removal
    /// 4. Detect and resolve contacts
    /// 5. Record trajectories of surviving massive bodies
    /// 6. Commit the changes staged during the step
    pub fn step(&mut self, dt: f64) -> Result<StepReport, EngineError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(EngineError::InvalidTimestep(dt));
        }

        let boundary = self.population.commit();
        let mut report = StepReport {
            dt,
            added: boundary.added,
            removed: boundary.removed,
            ..StepReport::default()
        };

        let lifetime = self.config.debris.lifetime;
        let mut expired = Vec::new();
        for body in self.population.split_mut().0.iter_mut() {
            body.age += dt;
            if body.kind() == BodyKind::Debris && body.age > lifetime {
                expired.push(body.id);
            }
        }
        report.expired = expired
            .into_iter()
            .filter(|&id| self.population.stage_remove(id))
            .count();

        let (bodies, removed) = self.population.split_mut();
        self.integrator.step(bodies, removed, dt, &self.gravity);

        let events = detect_collisions(self.population.bodies(), self.population.pending_removals());
        let resolved = resolve_collisions(&mut self.population, events, &self.config, &mut self.rng)?;
        report.merges = resolved.merges;
        report.absorbed = resolved.absorbed;
        report.debris_spawned = resolved.debris_spawned;

        let precision = self.config.trail.precision;
        let (bodies, removed) = self.population.split_mut();
        bodies
            .iter_mut()
            .filter(|b| b.is_massive() && !removed.contains(&b.id))
            .for_each(|b| b.record_trail(precision));

        let end = self.population.commit();
        report.added += end.added;
        report.removed += end.removed;

        self.time += dt;
        self.steps += 1;

        if let Some(id) = self.focus {
            if self.population.get(id).is_none() {
                debug!("focused body {:?} left the population", id);
                self.focus = None;
            }
        }

        Ok(report)
    }

    /// Immutable copy of everything a renderer needs
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            time: self.time,
            steps: self.steps,
            gravity: self.gravity.gravity,
            time_multiplier: 1.0,
            bodies: self.population.bodies().iter().map(BodySnapshot::from).collect(),
            focus: self.focus.and_then(|id| {
                self.population.get(id).map(|b| FocusSnapshot {
                    id,
                    position: [b.position.x, b.position.y],
                })
            }),
        }
    }

    /// Total mass of live massive bodies
    pub fn total_massive_mass(&self) -> f64 {
        self.population.total_massive_mass()
    }

    /// Total momentum of all live bodies
    ///
    /// Conserved by merges; drifts only through integration error.
    pub fn total_momentum(&self) -> Vector2<f64> {
        self.population.total_momentum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.population.kinetic_energy()
    }

    pub fn potential_energy(&self) -> f64 {
        self.gravity.potential_energy(self.population.bodies())
    }

    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }
}
