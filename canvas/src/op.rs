//! Drawing operations: the unit of replication.
//!
//! A [`DrawingOp`] is one completed or in-progress drawing instruction.
//! Ops are created locally by the engine from a gesture or received from
//! the transport; once appended to the log they are never mutated, and
//! they leave it only through an undo or a full clear.

#[cfg(test)]
#[path = "op_test.rs"]
mod op_test;

use serde::{Deserialize, Serialize};

use crate::geom::{Color, Point};

/// Which drawing tool produced an operation.
///
/// The lowercase serde names are the wire strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Continuous polyline, one point per sampled input event.
    #[default]
    Freehand,
    /// Axis-aligned rectangle between two corner points.
    Rectangle,
    /// Circle centered on the anchor with radius to the release point.
    Ellipse,
    /// A single anchored string of text.
    Text,
    /// Freehand stroke drawn in the canvas background color.
    Eraser,
}

impl Tool {
    /// Whether this tool streams its accumulated point buffer on every
    /// sampled move. Freehand and eraser share the streaming path.
    #[must_use]
    pub fn is_streaming(self) -> bool {
        matches!(self, Self::Freehand | Self::Eraser)
    }

    /// Whether this tool is sized by a two-point bounding gesture and
    /// emits only on release.
    #[must_use]
    pub fn is_bounding(self) -> bool {
        matches!(self, Self::Rectangle | Self::Ellipse)
    }
}

/// One drawing operation, as stored in the log and carried on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingOp {
    pub tool: Tool,
    /// Ordered sample points. Never empty for a committed op;
    /// rectangle/ellipse carry exactly two, text exactly one.
    pub points: Vec<Point>,
    pub color: Color,
    /// Stroke width in canvas pixels.
    pub stroke_width: u32,
    /// Present iff `tool` is [`Tool::Text`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl DrawingOp {
    /// A freehand or eraser stroke from the accumulated point buffer.
    #[must_use]
    pub fn stroke(tool: Tool, points: Vec<Point>, color: Color, stroke_width: u32) -> Self {
        Self { tool, points, color, stroke_width, text: None }
    }

    /// A two-point bounding shape (rectangle or ellipse).
    #[must_use]
    pub fn shape(tool: Tool, anchor: Point, release: Point, color: Color, stroke_width: u32) -> Self {
        Self { tool, points: vec![anchor, release], color, stroke_width, text: None }
    }

    /// A text op anchored at a single point.
    #[must_use]
    pub fn text(anchor: Point, text: impl Into<String>, color: Color, stroke_width: u32) -> Self {
        Self {
            tool: Tool::Text,
            points: vec![anchor],
            color,
            stroke_width,
            text: Some(text.into()),
        }
    }

    /// Committed-op invariants: non-empty points, `text` present iff the
    /// tool is text, and shape/text point arity.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        if self.points.is_empty() {
            return false;
        }
        if self.text.is_some() != (self.tool == Tool::Text) {
            return false;
        }
        match self.tool {
            Tool::Rectangle | Tool::Ellipse => self.points.len() == 2,
            Tool::Text => self.points.len() == 1,
            Tool::Freehand | Tool::Eraser => true,
        }
    }
}
