//! Wall-clock pacing for the physics loop
//!
//! Not a fixed-timestep scheduler: each iteration simulates however much
//! wall-clock time passed since the previous one (clamped, then scaled by
//! the time multiplier), and the loop sleeps only to keep iterations at
//! least `min_interval` apart.

use std::thread;
use std::time::{Duration, Instant};

use crate::config::RuntimeConfig;

/// Virtual seconds to simulate for one wall-clock frame
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use nbody_runtime::clock::frame_dt;
///
/// let max = Duration::from_millis(50);
/// assert_eq!(frame_dt(Duration::from_millis(10), max, 2.0, None), 0.02);
/// // A stalled frame is clamped before scaling
/// assert_eq!(frame_dt(Duration::from_secs(3), max, 1.0, None), 0.05);
/// // A fixed step ignores the wall clock
/// assert_eq!(frame_dt(Duration::from_secs(3), max, 1.0, Some(0.001)), 0.001);
/// ```
pub fn frame_dt(
    elapsed: Duration,
    max_frame: Duration,
    time_multiplier: f64,
    fixed_dt: Option<f64>,
) -> f64 {
    match fixed_dt {
        Some(dt) => dt,
        None => elapsed.min(max_frame).as_secs_f64() * time_multiplier,
    }
}

#[derive(Debug, Clone)]
pub struct Clock {
    last: Instant,
    min_interval: Duration,
    max_frame: Duration,
    fixed_dt: Option<f64>,
}

impl Clock {
    pub fn new(min_interval: Duration, max_frame: Duration, fixed_dt: Option<f64>) -> Self {
        Self {
            last: Instant::now(),
            min_interval,
            max_frame,
            fixed_dt,
        }
    }

    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self::new(config.min_interval(), config.max_frame(), config.fixed_dt)
    }

    /// Starts a new iteration and returns its time slice
    pub fn tick(&mut self, time_multiplier: f64) -> f64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        frame_dt(elapsed, self.max_frame, time_multiplier, self.fixed_dt)
    }

    /// Time left before the next iteration may start
    pub fn remaining(&self) -> Duration {
        self.min_interval.saturating_sub(self.last.elapsed())
    }

    /// Sleeps until `min_interval` has passed since the last tick
    pub fn throttle(&self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
    }
}
