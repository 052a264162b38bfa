//! Input model: the gesture state machine.
//!
//! One gesture is active at a time per local client. Each active variant
//! carries the context needed to emit intents on move and the final op
//! on release. A gesture never spans tool changes; switching tools
//! cancels whatever is in flight.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;

/// The gesture being tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next press.
    #[default]
    Idle,
    /// A freehand or eraser stroke: every sampled point so far, in order.
    Stroking { points: Vec<Point> },
    /// A rectangle/ellipse bounding gesture anchored at the press point.
    Sizing { anchor: Point },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
