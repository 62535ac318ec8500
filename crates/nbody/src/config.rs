//! Engine configuration
//!
//! Every tunable the step loop reads lives here and is passed in explicitly;
//! nothing is kept in globals. All types deserialize with defaults for any
//! missing field, so a config file only needs the values it changes:
//!
//! ```json
//! {
//!   "gravity": 1.0,
//!   "debris": { "lifetime": 10.0, "throttle": { "saturatedFactor": 0.25 } }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::trajectory::DEFAULT_TRAIL_CAPACITY;

/// Top-level engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Gravitational constant `G`
    pub gravity: f64,
    /// Separations below this contribute no force
    pub min_separation: f64,
    pub trail: TrailConfig,
    pub debris: DebrisConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gravity: 1.0,
            min_separation: 1e-9,
            trail: TrailConfig::default(),
            debris: DebrisConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Checks that every value is usable by the step loop
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.gravity.is_finite() {
            return Err(invalid("gravity must be finite"));
        }
        if !self.min_separation.is_finite() || self.min_separation <= 0.0 {
            return Err(invalid("minSeparation must be positive"));
        }
        if self.trail.capacity == 0 {
            return Err(invalid("trail.capacity must be at least 1"));
        }
        if self.trail.precision > MAX_TRAIL_PRECISION {
            return Err(invalid("trail.precision must be at most 15"));
        }
        self.debris.validate()
    }
}

fn invalid(reason: &str) -> EngineError {
    EngineError::InvalidConfig(reason.to_string())
}

/// Largest `TrailConfig::precision` accepted; f64 ages carry no more
/// significant decimals
pub const MAX_TRAIL_PRECISION: u32 = 15;

/// Trajectory buffer settings for massive bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrailConfig {
    /// Ring buffer length
    pub capacity: usize,
    /// Decimal places of age kept when deciding whether to start a new sample
    pub precision: u32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_TRAIL_CAPACITY,
            precision: 1,
        }
    }
}

/// Debris particle settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DebrisConfig {
    /// Virtual seconds a debris particle lives
    pub lifetime: f64,
    pub mass: f64,
    pub radius: f64,
    /// Lower bound of the ejection speed band (inclusive)
    pub speed_min: f64,
    /// Upper bound of the ejection speed band (exclusive)
    pub speed_max: f64,
    /// Spawn distance from a merged body's centre, in units of its radius
    pub surface_offset: f64,
    /// Initial age is drawn from `[-age_jitter, age_jitter)`
    pub age_jitter: f64,
    pub throttle: DebrisThrottle,
}

impl Default for DebrisConfig {
    fn default() -> Self {
        Self {
            lifetime: 15.0,
            mass: 10.0,
            radius: 1.0,
            speed_min: 600.0,
            speed_max: 700.0,
            surface_offset: 1.1,
            age_jitter: 1.0,
            throttle: DebrisThrottle::default(),
        }
    }
}

impl DebrisConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.lifetime.is_finite() || self.lifetime <= 0.0 {
            return Err(invalid("debris.lifetime must be positive"));
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(invalid("debris.mass must be positive"));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(invalid("debris.radius must not be negative"));
        }
        if !(self.speed_min.is_finite() && self.speed_max.is_finite())
            || self.speed_min < 0.0
            || self.speed_max < self.speed_min
        {
            return Err(invalid("debris speed band must satisfy 0 <= speedMin <= speedMax"));
        }
        if !self.age_jitter.is_finite() || self.age_jitter < 0.0 {
            return Err(invalid("debris.ageJitter must not be negative"));
        }
        self.throttle.validate()
    }
}

/// One step of the debris density ladder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThrottleTier {
    /// Applies while the live population is strictly below this count
    pub below: usize,
    /// Debris particles per unit of merged radius
    pub factor: f64,
}

/// Caps debris volume as the population grows
///
/// The density factor is taken from the first tier whose `below` bound the
/// live population has not reached; past the last tier `saturated_factor`
/// applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DebrisThrottle {
    pub tiers: Vec<ThrottleTier>,
    pub saturated_factor: f64,
}

impl Default for DebrisThrottle {
    fn default() -> Self {
        Self {
            tiers: vec![
                ThrottleTier { below: 100, factor: 4.0 },
                ThrottleTier { below: 200, factor: 3.0 },
                ThrottleTier { below: 300, factor: 2.0 },
                ThrottleTier { below: 400, factor: 1.0 },
            ],
            saturated_factor: 0.5,
        }
    }
}

impl DebrisThrottle {
    /// Debris particles per unit radius for a given live population
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::config::DebrisThrottle;
    ///
    /// let throttle = DebrisThrottle::default();
    /// assert_eq!(throttle.density_factor(0), 4.0);
    /// assert_eq!(throttle.density_factor(250), 2.0);
    /// assert_eq!(throttle.density_factor(1_000), 0.5);
    /// ```
    pub fn density_factor(&self, population: usize) -> f64 {
        self.tiers
            .iter()
            .find(|tier| population < tier.below)
            .map(|tier| tier.factor)
            .unwrap_or(self.saturated_factor)
    }

    /// Number of particles a merge of the given radius spawns
    ///
    /// Fractional counts round up, so any merge of a body with positive
    /// radius emits at least one particle while the factor is positive.
    pub fn spawn_count(&self, merged_radius: f64, population: usize) -> usize {
        let count = (merged_radius * self.density_factor(population)).ceil();
        if count.is_finite() && count > 0.0 {
            count as usize
        } else {
            0
        }
    }

    fn validate(&self) -> Result<(), EngineError> {
        let bad_factor = |f: f64| !f.is_finite() || f < 0.0;
        if self.tiers.iter().any(|t| bad_factor(t.factor)) || bad_factor(self.saturated_factor) {
            return Err(invalid("debris throttle factors must be finite and non-negative"));
        }
        if self.tiers.windows(2).any(|w| w[0].below >= w[1].below) {
            return Err(invalid("debris throttle tiers must have increasing bounds"));
        }
        Ok(())
    }
}
