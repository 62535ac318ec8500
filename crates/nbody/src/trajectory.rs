//! Fixed-length position history for massive bodies
//!
//! Samples are decimated by body age rather than taken once per physics
//! step: a new slot is only claimed when the body's age, truncated to a fixed
//! number of decimals, moves past the last recorded value. Between those
//! boundaries the current slot is overwritten so the newest point always
//! tracks the body.

use nalgebra::Point2;

/// Default number of slots in a trajectory ring buffer
pub const DEFAULT_TRAIL_CAPACITY: usize = 1000;

/// Truncate `age` to `precision` decimal places and return it as an integer
/// count of `10^-precision` units.
///
/// # Examples
///
/// ```
/// use nbody::trajectory::quantize_age;
///
/// assert_eq!(quantize_age(1.27, 1), 12);
/// assert_eq!(quantize_age(1.27, 0), 1);
/// ```
pub fn quantize_age(age: f64, precision: u32) -> i64 {
    let scale = 10f64.powi(precision as i32);
    (age * scale).trunc() as i64
}

/// Circular buffer of past positions owned by a massive body
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: Vec<Point2<f64>>,
    cursor: usize,
    wrapped: bool,
    last_sample: i64,
}

impl Trajectory {
    /// Creates a trajectory whose first sample is `origin`.
    ///
    /// A capacity of zero is bumped to one so there is always a current slot.
    pub fn new(origin: Point2<f64>, capacity: usize) -> Self {
        Self {
            points: vec![origin; capacity.max(1)],
            cursor: 0,
            wrapped: false,
            last_sample: 0,
        }
    }

    /// Records `position` for a body of the given `age`.
    pub fn record(&mut self, position: Point2<f64>, age: f64, precision: u32) {
        let sample = quantize_age(age, precision);
        if sample > self.last_sample {
            self.advance();
            self.last_sample = sample;
        }
        self.points[self.cursor] = position;
    }

    fn advance(&mut self) {
        self.cursor += 1;
        if self.cursor == self.points.len() {
            self.cursor = 0;
            self.wrapped = true;
        }
    }

    /// Index of the most recently written slot
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the cursor has gone round the buffer at least once
    pub fn has_wrapped(&self) -> bool {
        self.wrapped
    }

    pub fn capacity(&self) -> usize {
        self.points.len()
    }

    /// Raw slots in storage order; pair with `cursor` and `has_wrapped`.
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    /// Number of slots holding real samples
    pub fn sample_count(&self) -> usize {
        if self.wrapped {
            self.points.len()
        } else {
            self.cursor + 1
        }
    }

    /// Most recent sample
    pub fn latest(&self) -> Point2<f64> {
        self.points[self.cursor]
    }

    /// Samples ordered from oldest to newest
    pub fn iter_ordered(&self) -> impl Iterator<Item = &Point2<f64>> + '_ {
        let split = self.cursor + 1;
        let (oldest, newest): (&[Point2<f64>], &[Point2<f64>]) = if self.wrapped {
            (&self.points[split..], &self.points[..split])
        } else {
            (&[], &self.points[..split])
        };
        oldest.iter().chain(newest.iter())
    }
}
