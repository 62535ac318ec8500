//! Single-threaded simulation driver
//!
//! Owns a [`SystemState`] together with the preset it was generated from and
//! applies [`Command`]s to it. The threaded [`SimulationHandle`] wraps one of
//! these; tests and tools can drive it directly.
//!
//! [`SimulationHandle`]: crate::handle::SimulationHandle

use log::{info, warn};

use nbody::config::DebrisConfig;
use nbody::snapshot::WorldSnapshot;
use nbody::state::{StepReport, SystemState};
use system_generator::Preset;

use crate::command::Command;
use crate::config::RuntimeConfig;
use crate::error::SimulationError;

#[derive(Debug, Clone)]
pub struct Simulation {
    state: SystemState,
    preset: Preset,
    time_multiplier: f64,
    seed: u64,
    generation: u64,
    /// Debris settings for presets that do not bring their own
    engine_debris: DebrisConfig,
}

impl Simulation {
    /// Builds the configured preset and loads it into a fresh system
    pub fn new(config: &RuntimeConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let preset: Preset = config.preset.parse()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let scenario = preset.build(seed)?;

        let engine_debris = config.engine.debris.clone();
        let mut state = SystemState::new(config.engine.clone(), seed)?;
        state.set_gravity(scenario.gravity)?;
        state.set_debris_config(scenario.debris.clone().unwrap_or_else(|| engine_debris.clone()))?;
        state.replace_bodies(scenario.bodies);
        info!("simulation seeded with {}", seed);

        Ok(Self {
            state,
            preset,
            time_multiplier: scenario.time_multiplier,
            seed,
            generation: 0,
            engine_debris,
        })
    }

    pub fn state(&self) -> &SystemState {
        &self.state
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }

    /// Virtual seconds per wall-clock second for the loaded preset
    pub fn time_multiplier(&self) -> f64 {
        self.time_multiplier
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn apply(&mut self, command: Command) -> Result<(), SimulationError> {
        match command {
            Command::Spawn(body) => {
                self.state.stage_body(body);
            }
            Command::SpawnDebrisBurst {
                position,
                count,
                speed,
                color,
            } => {
                self.state.spawn_debris_burst(position, count, speed, color)?;
            }
            Command::SetFocus(id) => self.state.set_focus(id),
            Command::Regenerate(name) => {
                self.regenerate(&name)?;
            }
        }
        Ok(())
    }

    /// Replaces the whole system with a freshly built preset
    ///
    /// An unknown name leaves the system untouched and returns `Ok(false)`.
    /// Each regeneration uses a new seed derived from the original one, so
    /// loading the same preset twice does not produce an identical belt.
    pub fn regenerate(&mut self, name: &str) -> Result<bool, SimulationError> {
        let Some(preset) = Preset::from_name(name) else {
            warn!("ignoring regenerate request for unknown preset {:?}", name);
            return Ok(false);
        };
        let generation = self.generation + 1;
        let scenario = preset.build(self.seed.wrapping_add(generation))?;
        let debris = scenario.debris.clone().unwrap_or_else(|| self.engine_debris.clone());
        debris.validate()?;

        self.state.clear();
        self.state.set_gravity(scenario.gravity)?;
        self.state.set_debris_config(debris)?;
        self.state.replace_bodies(scenario.bodies);
        self.preset = preset;
        self.time_multiplier = scenario.time_multiplier;
        self.generation = generation;
        Ok(true)
    }

    /// Steps the system by `dt`; a zero or negative slice does nothing
    pub fn advance(&mut self, dt: f64) -> Result<Option<StepReport>, SimulationError> {
        if dt > 0.0 {
            Ok(Some(self.state.step(dt)?))
        } else {
            Ok(None)
        }
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            time_multiplier: self.time_multiplier,
            ..self.state.snapshot()
        }
    }
}
