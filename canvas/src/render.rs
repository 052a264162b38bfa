//! Pure rendering of committed ops, shape previews and remote cursors
//! onto a [`Surface`].
//!
//! Rendering is a pure function of its inputs: replaying the same op
//! sequence onto two equal surfaces produces identical pixels. State
//! that changes what the canvas shows lives in the log, never here.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{CURSOR_RADIUS, TEXT_FONT_SCALE};
use crate::geom::{Color, Point};
use crate::op::{DrawingOp, Tool};
use crate::surface::{LineStyle, Surface};

/// Draw one committed op. Malformed ops (too few points, missing text)
/// draw nothing rather than fail; the log may hold in-progress stroke
/// prefixes with a single point.
pub fn draw_op(surface: &mut dyn Surface, op: &DrawingOp) {
    match op.tool {
        Tool::Freehand | Tool::Eraser => {
            if op.points.len() >= 2 {
                surface.stroke_polyline(&op.points, op.color, op.stroke_width, LineStyle::Solid);
            }
        }
        Tool::Rectangle => {
            if let [a, b] = op.points[..] {
                surface.stroke_rect(a, b, op.color, op.stroke_width, LineStyle::Solid);
            }
        }
        Tool::Ellipse => {
            if let [center, edge] = op.points[..] {
                let radius = center.distance_to(edge);
                surface.stroke_circle(center, radius, op.color, op.stroke_width, LineStyle::Solid);
            }
        }
        Tool::Text => {
            if let (Some(&anchor), Some(text)) = (op.points.first(), op.text.as_deref()) {
                let font_px = op.stroke_width * TEXT_FONT_SCALE;
                surface.fill_text(text, anchor, font_px, op.color);
            }
        }
    }
}

/// Clear the surface to the background color and draw every op in order.
pub fn replay(surface: &mut dyn Surface, ops: &[DrawingOp]) {
    surface.fill(Color::BACKGROUND);
    for op in ops {
        draw_op(surface, op);
    }
}

/// Draw the dashed preview of an in-flight bounding gesture. Tools that
/// preview as their own stroke draw nothing here.
pub fn draw_preview(
    surface: &mut dyn Surface,
    tool: Tool,
    anchor: Point,
    current: Point,
    color: Color,
    stroke_width: u32,
) {
    match tool {
        Tool::Rectangle => {
            surface.stroke_rect(anchor, current, color, stroke_width, LineStyle::Dashed);
        }
        Tool::Ellipse => {
            let radius = anchor.distance_to(current);
            surface.stroke_circle(anchor, radius, color, stroke_width, LineStyle::Dashed);
        }
        Tool::Freehand | Tool::Text | Tool::Eraser => {}
    }
}

/// Draw one remote participant's cursor dot in their identity color.
pub fn draw_cursor(surface: &mut dyn Surface, at: Point, color: Color) {
    surface.fill_circle(at, CURSOR_RADIUS, color);
}
