//! Immutable, serializable views of the simulation
//!
//! Renderers and other observers only ever see these types; they are plain
//! data and can be shared across threads or written out as JSON.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::body::{Body, BodyId, BodyKind, Color};
use crate::error::EngineError;
use crate::trajectory::Trajectory;

/// Entire world at one step boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldSnapshot {
    /// Virtual seconds simulated
    pub time: f64,
    pub steps: u64,
    pub gravity: f64,
    /// Virtual seconds per wall-clock second
    pub time_multiplier: f64,
    pub bodies: Vec<BodySnapshot>,
    pub focus: Option<FocusSnapshot>,
}

impl WorldSnapshot {
    /// Empty world at time zero
    pub fn empty() -> Self {
        Self {
            time: 0.0,
            steps: 0,
            gravity: 0.0,
            time_multiplier: 1.0,
            bodies: Vec::new(),
            focus: None,
        }
    }

    /// Body closest to `point`, first in order on ties
    pub fn nearest_body_to(&self, point: Point2<f64>) -> Result<&BodySnapshot, EngineError> {
        self.bodies
            .iter()
            .map(|b| ((b.position() - point).magnitude_squared(), b))
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, b)| b)
            .ok_or(EngineError::EmptyPopulation)
    }

    pub fn body(&self, id: BodyId) -> Option<&BodySnapshot> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn count_kind(&self, kind: BodyKind) -> usize {
        self.bodies.iter().filter(|b| b.kind == kind).count()
    }
}

/// Focused body and where it currently is
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusSnapshot {
    pub id: BodyId,
    pub position: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodySnapshot {
    pub id: BodyId,
    pub kind: BodyKind,
    pub position: [f64; 2],
    pub velocity: [f64; 2],
    pub radius: f64,
    pub mass: f64,
    pub color: Color,
    pub age: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub trail: Option<TrailSnapshot>,
}

impl BodySnapshot {
    pub fn position(&self) -> Point2<f64> {
        Point2::new(self.position[0], self.position[1])
    }
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id,
            kind: body.kind(),
            position: [body.position.x, body.position.y],
            velocity: [body.velocity.x, body.velocity.y],
            radius: body.radius(),
            mass: body.mass(),
            color: body.color,
            age: body.age,
            trail: body.trajectory().map(TrailSnapshot::from),
        }
    }
}

/// Copy of a trajectory ring buffer
///
/// `points` is in storage order; `cursor` is the newest slot and, once
/// `wrapped` is set, the slot after it is the oldest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailSnapshot {
    pub points: Vec<[f64; 2]>,
    pub cursor: usize,
    pub wrapped: bool,
}

impl TrailSnapshot {
    /// Recorded samples from oldest to newest
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::snapshot::TrailSnapshot;
    ///
    /// let trail = TrailSnapshot {
    ///     points: vec![[3.0, 0.0], [1.0, 0.0], [2.0, 0.0]],
    ///     cursor: 0,
    ///     wrapped: true,
    /// };
    /// let xs: Vec<f64> = trail.iter_ordered().map(|p| p[0]).collect();
    /// assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    /// ```
    pub fn iter_ordered(&self) -> impl Iterator<Item = &[f64; 2]> + '_ {
        let split = (self.cursor + 1).min(self.points.len());
        let (head, tail) = self.points.split_at(split);
        let older: &[[f64; 2]] = if self.wrapped { tail } else { &[] };
        older.iter().chain(head.iter())
    }
}

impl From<&Trajectory> for TrailSnapshot {
    fn from(trail: &Trajectory) -> Self {
        Self {
            points: trail.points().iter().map(|p| [p.x, p.y]).collect(),
            cursor: trail.cursor(),
            wrapped: trail.has_wrapped(),
        }
    }
}
