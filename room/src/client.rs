//! `RoomClient`: the one object a host embeds.
//!
//! Composes the input engine with the session reconciler. Pointer and
//! transport events go in; each handler returns the [`Effects`] the host
//! must carry out: wire events to send, a text prompt to open, a canvas
//! repaint. Cursor reports are emitted on every sampled pointer position
//! while joined, whatever the tool or gesture state.

use canvas::engine::{Action, CanvasCore};
use canvas::geom::{Color, Point};
use canvas::op::Tool;
use canvas::render;
use canvas::surface::Surface;

use crate::session::RoomSession;
use crate::wire::{ClientEvent, ServerEvent};

/// What the host must do after handing the client an event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Effects {
    /// Wire events to send, in order.
    pub outbound: Vec<ClientEvent>,
    /// Open a text input anchored at this canvas point.
    pub text_prompt: Option<Point>,
    /// The visible canvas changed; repaint.
    pub render: bool,
}

impl Effects {
    fn push_outbound(&mut self, event: Option<ClientEvent>) {
        if let Some(event) = event {
            self.outbound.push(event);
        }
    }
}

/// The in-flight local gesture drawn over the committed canvas.
#[derive(Debug, Clone, PartialEq)]
enum Overlay {
    Stroke(Vec<Point>),
    Shape { tool: Tool, anchor: Point, current: Point },
}

/// One user's whiteboard client for one room.
#[derive(Debug, Clone)]
pub struct RoomClient {
    core: CanvasCore,
    session: RoomSession,
    overlay: Option<Overlay>,
}

impl RoomClient {
    #[must_use]
    pub fn new(room_id: impl Into<String>, username: impl Into<String>, color: Color) -> Self {
        let mut core = CanvasCore::new();
        core.set_color(color);
        Self {
            core,
            session: RoomSession::new(room_id, username, color),
            overlay: None,
        }
    }

    #[must_use]
    pub fn core(&self) -> &CanvasCore {
        &self.core
    }

    #[must_use]
    pub fn session(&self) -> &RoomSession {
        &self.session
    }

    // =============================================================
    // Tool settings
    // =============================================================

    pub fn set_tool(&mut self, tool: Tool) {
        self.core.set_tool(tool);
        self.overlay = None;
    }

    pub fn set_color(&mut self, color: Color) {
        self.core.set_color(color);
    }

    pub fn set_stroke_width(&mut self, width: u32) {
        self.core.set_stroke_width(width);
    }

    // =============================================================
    // Connection lifecycle
    // =============================================================

    pub fn connect(&mut self) {
        self.session.connect();
    }

    pub fn transport_connected(&mut self, local_id: impl Into<String>) -> Effects {
        let mut effects = Effects::default();
        effects.push_outbound(self.session.transport_connected(local_id));
        effects
    }

    pub fn transport_disconnected(&mut self) -> Effects {
        self.session.transport_disconnected();
        self.core.cancel_gesture();
        self.overlay = None;
        Effects { render: true, ..Effects::default() }
    }

    pub fn leave(&mut self) -> Effects {
        let mut effects = Effects { render: true, ..Effects::default() };
        effects.push_outbound(self.session.leave());
        self.core.cancel_gesture();
        self.overlay = None;
        effects
    }

    // =============================================================
    // Pointer and text input
    // =============================================================

    pub fn pointer_down(&mut self, at: Point) -> Effects {
        let actions = self.core.on_pointer_down(at);
        let mut effects = self.collect(actions);
        effects.push_outbound(self.session.cursor_intent(at));
        effects
    }

    pub fn pointer_move(&mut self, at: Point) -> Effects {
        let actions = self.core.on_pointer_move(at);
        let mut effects = self.collect(actions);
        effects.push_outbound(self.session.cursor_intent(at));
        effects
    }

    pub fn pointer_up(&mut self, at: Point) -> Effects {
        let actions = self.core.on_pointer_up(at);
        let mut effects = self.collect(actions);
        effects.push_outbound(self.session.cursor_intent(at));
        self.overlay = None;
        effects
    }

    /// Commit text entered at the prompt opened by a text-tool press.
    pub fn commit_text(&mut self, anchor: Point, text: &str) -> Effects {
        let actions = self.core.commit_text(anchor, text);
        self.collect(actions)
    }

    /// Request a room-wide canvas clear.
    pub fn request_clear(&mut self) -> Effects {
        let mut effects = Effects::default();
        effects.push_outbound(self.session.clear_intent());
        effects
    }

    /// Request an undo of the room's most recent op.
    pub fn request_undo(&mut self) -> Effects {
        let mut effects = Effects::default();
        effects.push_outbound(self.session.undo_intent());
        effects
    }

    pub fn send_chat(&mut self, message: &str) -> Effects {
        let mut effects = Effects::default();
        effects.push_outbound(self.session.chat_intent(message));
        effects
    }

    // =============================================================
    // Inbound events and rendering
    // =============================================================

    /// Apply one inbound wire event.
    pub fn apply(&mut self, event: ServerEvent) -> Effects {
        let render = self.session.apply(event);
        Effects { render, ..Effects::default() }
    }

    /// Paint the full client view: committed log, then the local
    /// in-flight gesture, then remote cursors on top.
    pub fn render_to(&self, surface: &mut dyn Surface) {
        render::replay(surface, self.session.log().snapshot());
        match &self.overlay {
            Some(Overlay::Stroke(points)) => {
                let op = canvas::op::DrawingOp::stroke(
                    self.core.tool(),
                    points.clone(),
                    self.core.color(),
                    self.core.stroke_width(),
                );
                render::draw_op(surface, &op);
            }
            Some(Overlay::Shape { tool, anchor, current }) => {
                render::draw_preview(
                    surface,
                    *tool,
                    *anchor,
                    *current,
                    self.core.color(),
                    self.core.stroke_width(),
                );
            }
            None => {}
        }
        for participant in self.session.participants() {
            if let Some(cursor) = participant.cursor {
                render::draw_cursor(surface, cursor, participant.color);
            }
        }
    }

    fn collect(&mut self, actions: Vec<Action>) -> Effects {
        let mut effects = Effects::default();
        for action in actions {
            match action {
                Action::Emit(op) => effects.push_outbound(self.session.draw_intent(op)),
                Action::PreviewStroke(points) => {
                    self.overlay = Some(Overlay::Stroke(points));
                }
                Action::PreviewShape { tool, anchor, current } => {
                    self.overlay = Some(Overlay::Shape { tool, anchor, current });
                }
                Action::TextPromptRequested { anchor } => {
                    effects.text_prompt = Some(anchor);
                }
                Action::RenderNeeded => effects.render = true,
            }
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Participant;
    use crate::wire::RoomSnapshot;
    use canvas::op::DrawingOp;
    use canvas::surface::Bitmap;

    fn joined_client() -> RoomClient {
        let mut client = RoomClient::new("room-1", "tester", Color::BLACK);
        client.connect();
        client.transport_connected("local-1");
        client.apply(ServerEvent::RoomData(RoomSnapshot::default()));
        client
    }

    fn draws(effects: &Effects) -> Vec<&DrawingOp> {
        effects
            .outbound
            .iter()
            .filter_map(|e| match e {
                ClientEvent::Draw { op, .. } => Some(op),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn connect_flow_sends_join_then_intents_flow() {
        let mut client = RoomClient::new("room-1", "tester", Color::BLACK);
        client.connect();
        let effects = client.transport_connected("local-1");
        assert!(matches!(effects.outbound[..], [ClientEvent::Join { .. }]));

        client.apply(ServerEvent::RoomData(RoomSnapshot::default()));
        let effects = client.pointer_down(Point::new(10.0, 10.0));
        assert_eq!(draws(&effects).len(), 1);
    }

    #[test]
    fn pointer_events_carry_cursor_reports_while_joined() {
        let mut client = joined_client();
        let down = client.pointer_down(Point::new(10.0, 10.0));
        assert!(down
            .outbound
            .iter()
            .any(|e| matches!(e, ClientEvent::CursorMove { x, y, .. } if *x == 10.0 && *y == 10.0)));

        // Release reports the cursor alongside the final stroke emission.
        let up = client.pointer_up(Point::new(20.0, 20.0));
        assert!(up
            .outbound
            .iter()
            .any(|e| matches!(e, ClientEvent::CursorMove { x, y, .. } if *x == 20.0 && *y == 20.0)));

        // Moves outside a gesture still report the cursor.
        let moved = client.pointer_move(Point::new(30.0, 40.0));
        assert!(matches!(moved.outbound[..], [ClientEvent::CursorMove { .. }]));
    }

    #[test]
    fn nothing_is_sent_before_the_room_snapshot() {
        let mut client = RoomClient::new("room-1", "tester", Color::BLACK);
        client.connect();
        client.transport_connected("local-1");
        let effects = client.pointer_down(Point::new(5.0, 5.0));
        assert!(effects.outbound.is_empty(), "draw and cursor intents are gated");
    }

    #[test]
    fn text_tool_press_opens_a_prompt_and_commit_emits() {
        let mut client = joined_client();
        client.set_tool(Tool::Text);
        let press = client.pointer_down(Point::new(40.0, 50.0));
        assert_eq!(press.text_prompt, Some(Point::new(40.0, 50.0)));
        assert!(draws(&press).is_empty());

        let commit = client.commit_text(Point::new(40.0, 50.0), "hello");
        let ops = draws(&commit);
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].text.as_deref(), Some("hello"));
    }

    #[test]
    fn clear_undo_chat_requests_map_to_wire_events() {
        let mut client = joined_client();
        assert!(matches!(
            client.request_clear().outbound[..],
            [ClientEvent::ClearCanvas { .. }]
        ));
        assert!(matches!(client.request_undo().outbound[..], [ClientEvent::Undo { .. }]));
        assert!(matches!(
            client.send_chat("hi").outbound[..],
            [ClientEvent::SendMessage { .. }]
        ));
        assert!(client.send_chat("   ").outbound.is_empty());
    }

    #[test]
    fn disconnect_cancels_the_gesture_and_repaints() {
        let mut client = joined_client();
        client.pointer_down(Point::new(1.0, 1.0));
        let effects = client.transport_disconnected();
        assert!(effects.render);
        assert!(client.core().input().is_idle());
        // The interrupted gesture emits nothing on a later release.
        assert!(draws(&client.pointer_up(Point::new(2.0, 2.0))).is_empty());
    }

    #[test]
    fn render_shows_committed_ops_and_remote_cursors() {
        let mut client = joined_client();
        client.apply(ServerEvent::Drawing(DrawingOp::stroke(
            Tool::Freehand,
            vec![Point::new(2.0, 10.0), Point::new(18.0, 10.0)],
            Color::BLACK,
            3,
        )));
        client.apply(ServerEvent::UserJoined(Participant {
            id: "u2".to_owned(),
            username: "peer".to_owned(),
            color: Color::rgb(0xFF, 0x3B, 0x30),
            joined_at: 0,
            cursor: Some(Point::new(40.0, 40.0)),
        }));

        let mut bmp = Bitmap::new(60, 60);
        client.render_to(&mut bmp);
        assert_eq!(bmp.pixel(10, 10), Some(Color::BLACK));
        assert_eq!(bmp.pixel(40, 40), Some(Color::rgb(0xFF, 0x3B, 0x30)));
    }

    #[test]
    fn in_flight_stroke_is_painted_as_an_overlay() {
        let mut client = joined_client();
        client.pointer_down(Point::new(2.0, 10.0));
        client.pointer_move(Point::new(18.0, 10.0));

        let mut bmp = Bitmap::new(20, 20);
        client.render_to(&mut bmp);
        assert_eq!(bmp.pixel(10, 10), Some(Color::BLACK));

        // Release drops the overlay; until the server echoes the op
        // back, the committed canvas is still blank.
        client.pointer_up(Point::new(18.0, 10.0));
        let mut bmp = Bitmap::new(20, 20);
        client.render_to(&mut bmp);
        assert_eq!(bmp.pixel(10, 10), Some(Color::BACKGROUND));
    }
}
