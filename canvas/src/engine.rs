//! The local input engine: turns pointer events into drawing intents.
//!
//! DESIGN
//! ======
//! `CanvasCore` owns only the local tool settings and the gesture state
//! machine. It never touches the log or the transport; each handler
//! returns the [`Action`]s for the host to process, in order. Streaming
//! tools re-send the full accumulated point buffer on every sample so a
//! late joiner's log converges to the final stroke without delta logic.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::consts::DEFAULT_STROKE_WIDTH;
use crate::geom::{Color, Point};
use crate::input::InputState;
use crate::op::{DrawingOp, Tool};

/// What the host should do after an input event, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Send this op to the room as a drawing intent.
    Emit(DrawingOp),
    /// Show the in-progress stroke over the committed canvas.
    PreviewStroke(Vec<Point>),
    /// Show a dashed shape preview between anchor and cursor.
    PreviewShape { tool: Tool, anchor: Point, current: Point },
    /// Prompt the user for text input anchored at this point.
    TextPromptRequested { anchor: Point },
    /// The visible canvas changed; repaint.
    RenderNeeded,
}

/// Local tool settings plus the active gesture.
#[derive(Debug, Clone)]
pub struct CanvasCore {
    tool: Tool,
    color: Color,
    stroke_width: u32,
    input: InputState,
}

impl Default for CanvasCore {
    fn default() -> Self {
        Self {
            tool: Tool::Freehand,
            color: Color::BLACK,
            stroke_width: DEFAULT_STROKE_WIDTH,
            input: InputState::Idle,
        }
    }
}

impl CanvasCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Select a tool. A gesture in flight is cancelled, not committed.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.input = InputState::Idle;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_stroke_width(&mut self, width: u32) {
        self.stroke_width = width;
    }

    /// Discard any gesture in flight without emitting.
    pub fn cancel_gesture(&mut self) {
        self.input = InputState::Idle;
    }

    /// The color ops are emitted in. The eraser always paints background.
    fn active_color(&self) -> Color {
        if self.tool == Tool::Eraser { Color::BACKGROUND } else { self.color }
    }

    /// Pointer pressed at `at`.
    pub fn on_pointer_down(&mut self, at: Point) -> Vec<Action> {
        match self.tool {
            Tool::Text => vec![Action::TextPromptRequested { anchor: at }],
            Tool::Rectangle | Tool::Ellipse => {
                self.input = InputState::Sizing { anchor: at };
                Vec::new()
            }
            Tool::Freehand | Tool::Eraser => {
                let points = vec![at];
                self.input = InputState::Stroking { points: points.clone() };
                vec![
                    Action::Emit(DrawingOp::stroke(
                        self.tool,
                        points.clone(),
                        self.active_color(),
                        self.stroke_width,
                    )),
                    Action::PreviewStroke(points),
                    Action::RenderNeeded,
                ]
            }
        }
    }

    /// Pointer moved to `at`. Moves outside a gesture do nothing here;
    /// cursor broadcasting is the host's concern.
    pub fn on_pointer_move(&mut self, at: Point) -> Vec<Action> {
        match &mut self.input {
            InputState::Idle => Vec::new(),
            InputState::Stroking { points } => {
                points.push(at);
                let points = points.clone();
                vec![
                    Action::Emit(DrawingOp::stroke(
                        self.tool,
                        points.clone(),
                        self.active_color(),
                        self.stroke_width,
                    )),
                    Action::PreviewStroke(points),
                    Action::RenderNeeded,
                ]
            }
            InputState::Sizing { anchor } => {
                let anchor = *anchor;
                vec![
                    Action::PreviewShape { tool: self.tool, anchor, current: at },
                    Action::RenderNeeded,
                ]
            }
        }
    }

    /// Pointer released at `at`. A release with no gesture in flight is
    /// silently ignored.
    pub fn on_pointer_up(&mut self, at: Point) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Stroking { points } => vec![
                Action::Emit(DrawingOp::stroke(
                    self.tool,
                    points,
                    self.active_color(),
                    self.stroke_width,
                )),
                Action::RenderNeeded,
            ],
            InputState::Sizing { anchor } => vec![
                Action::Emit(DrawingOp::shape(
                    self.tool,
                    anchor,
                    at,
                    self.active_color(),
                    self.stroke_width,
                )),
                Action::RenderNeeded,
            ],
        }
    }

    /// Commit text entered at a prompt. Whitespace-only input cancels.
    pub fn commit_text(&mut self, anchor: Point, text: &str) -> Vec<Action> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        vec![
            Action::Emit(DrawingOp::text(anchor, trimmed, self.color, self.stroke_width)),
            Action::RenderNeeded,
        ]
    }
}
