//! Named, fixed-recipe systems
//!
//! Each preset picks its own gravitational constant and time multiplier
//! (virtual seconds per wall-clock second) along with the bodies.

use std::fmt;
use std::str::FromStr;

use log::info;
use serde::{Deserialize, Serialize};

use nbody::body::Body;
use nbody::config::DebrisConfig;
use nbody::error::EngineError;

pub mod binary;
pub mod classic;
pub mod figure_eight;
pub mod solar;
pub mod toy;

/// Every system the generator knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Sun with a handful of planets, a moon and an asteroid belt
    Toy,
    /// Three equal masses chasing each other around a figure-eight
    FigureEight,
    /// Two stars in mutual orbit with circumbinary and S-type planets
    Binary,
    /// Eight planets and the Moon in real units, 30 days per second
    SolarFast,
    /// Same model at 1 day per second
    SolarRealistic,
    /// Sun, four light planets and one heavy intruder on crossing paths
    Classic,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::Toy,
        Preset::FigureEight,
        Preset::Binary,
        Preset::SolarFast,
        Preset::SolarRealistic,
        Preset::Classic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Toy => "toy",
            Preset::FigureEight => "figure-eight",
            Preset::Binary => "binary",
            Preset::SolarFast => "solar-fast",
            Preset::SolarRealistic => "solar-realistic",
            Preset::Classic => "classic",
        }
    }

    /// Looks a preset up by its name; unknown names give `None`
    ///
    /// # Examples
    ///
    /// ```
    /// use system_generator::Preset;
    ///
    /// assert_eq!(Preset::from_name("figure-eight"), Some(Preset::FigureEight));
    /// assert_eq!(Preset::from_name("nope"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Preset> {
        Preset::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn gravity(self) -> f64 {
        match self {
            Preset::Toy => toy::GRAVITY,
            Preset::FigureEight => figure_eight::GRAVITY,
            Preset::Binary => binary::GRAVITY,
            Preset::SolarFast | Preset::SolarRealistic => solar::GRAVITY,
            Preset::Classic => classic::GRAVITY,
        }
    }

    /// Virtual seconds simulated per wall-clock second
    pub fn time_multiplier(self) -> f64 {
        match self {
            Preset::Toy => toy::TIME_MULTIPLIER,
            Preset::FigureEight => figure_eight::TIME_MULTIPLIER,
            Preset::Binary => binary::TIME_MULTIPLIER,
            Preset::SolarFast => solar::FAST_TIME_MULTIPLIER,
            Preset::SolarRealistic => solar::REALISTIC_TIME_MULTIPLIER,
            Preset::Classic => classic::TIME_MULTIPLIER,
        }
    }

    /// Debris settings matched to the preset's units
    ///
    /// `None` keeps the engine's configured debris, which is scaled for the
    /// engine-unit presets.
    pub fn debris(self) -> Option<DebrisConfig> {
        match self {
            Preset::SolarFast | Preset::SolarRealistic => Some(solar::debris()),
            _ => None,
        }
    }

    /// Builds the preset's bodies; `seed` drives any random placement
    pub fn build(self, seed: u64) -> Result<Scenario, EngineError> {
        let bodies = match self {
            Preset::Toy => toy::bodies(seed)?,
            Preset::FigureEight => figure_eight::bodies()?,
            Preset::Binary => binary::bodies()?,
            Preset::SolarFast | Preset::SolarRealistic => solar::bodies(seed)?,
            Preset::Classic => classic::bodies()?,
        };
        info!("built preset {} with {} bodies", self, bodies.len());
        Ok(Scenario {
            preset: self,
            gravity: self.gravity(),
            time_multiplier: self.time_multiplier(),
            debris: self.debris(),
            bodies,
        })
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A preset name that matched nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPreset(pub String);

impl fmt::Display for UnknownPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown preset: {}", self.0)
    }
}

impl std::error::Error for UnknownPreset {}

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::from_name(s).ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

/// Everything needed to (re)start a simulation from a preset
#[derive(Debug, Clone)]
pub struct Scenario {
    pub preset: Preset,
    pub gravity: f64,
    pub time_multiplier: f64,
    /// Debris settings to use instead of the engine's, if any
    pub debris: Option<DebrisConfig>,
    pub bodies: Vec<Body>,
}
