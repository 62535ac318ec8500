use nalgebra::Point2;

use nbody::body::{Body, BodyId, Color};
use nbody::population::SpeedRange;

/// Requests sent to the physics thread
///
/// Commands are applied between steps; population changes they make become
/// live at the start of the following step.
#[derive(Debug, Clone)]
pub enum Command {
    /// Add a fully constructed body
    Spawn(Body),
    /// Throw `count` debris particles out of `position`
    SpawnDebrisBurst {
        position: Point2<f64>,
        count: usize,
        speed: SpeedRange,
        color: Color,
    },
    /// Follow a body, or stop following with `None`
    SetFocus(Option<BodyId>),
    /// Discard everything and load the named preset
    Regenerate(String),
}
