//! Session reconciler: the client's replicated view of one room.
//!
//! DESIGN
//! ======
//! `RoomSession` owns everything the server is authoritative over: the
//! drawing log, the participant set, and the chat transcript. Inbound
//! events flow through a single [`RoomSession::apply`] dispatcher so
//! ordering is whatever the transport delivered; the session never
//! reorders or buffers. A `room-data` snapshot always replaces local
//! state wholesale, which makes reconnect-and-resync the one recovery
//! path for every transport failure.
//!
//! Phases move strictly forward within one connection attempt:
//! `Disconnected → Connecting → AwaitingRoomData → Active`, and any
//! disconnect drops back to `Disconnected`. Outbound intents other than
//! the join itself are produced only while `Active`; callers get `None`
//! before then and simply send nothing.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use canvas::geom::{Color, Point};
use canvas::log::DrawLog;
use canvas::op::DrawingOp;
use tracing::{debug, info, warn};

use crate::types::{ChatMessage, Participant};
use crate::wire::{ClientEvent, ServerEvent};

/// Where the session is in its connection lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Disconnected,
    /// Transport connect requested, not yet established.
    Connecting,
    /// Join sent; waiting for the room snapshot.
    AwaitingRoomData,
    /// Snapshot applied; fully joined.
    Active,
}

/// One client's membership in one room.
#[derive(Debug, Clone)]
pub struct RoomSession {
    room_id: String,
    username: String,
    color: Color,
    phase: Phase,
    /// Transport-assigned id for this connection, known once connected.
    local_id: Option<String>,
    log: DrawLog,
    participants: Vec<Participant>,
    chat: Vec<ChatMessage>,
    /// Most recent server error, kept for display until the next one.
    last_error: Option<String>,
}

impl RoomSession {
    #[must_use]
    pub fn new(room_id: impl Into<String>, username: impl Into<String>, color: Color) -> Self {
        Self {
            room_id: room_id.into(),
            username: username.into(),
            color,
            phase: Phase::Disconnected,
            local_id: None,
            log: DrawLog::new(),
            participants: Vec::new(),
            chat: Vec::new(),
            last_error: None,
        }
    }

    #[must_use]
    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the session has joined and may emit room intents.
    #[must_use]
    pub fn is_joined(&self) -> bool {
        self.phase == Phase::Active
    }

    #[must_use]
    pub fn log(&self) -> &DrawLog {
        &self.log
    }

    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    #[must_use]
    pub fn chat(&self) -> &[ChatMessage] {
        &self.chat
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    // =============================================================
    // Connection lifecycle
    // =============================================================

    /// Mark that the host has started the transport connect.
    pub fn connect(&mut self) {
        if self.phase != Phase::Disconnected {
            debug!(phase = ?self.phase, "connect requested while already connected, ignoring");
            return;
        }
        info!(room = %self.room_id, "connecting");
        self.phase = Phase::Connecting;
    }

    /// The transport came up and assigned us `local_id`. Returns the
    /// join event to send, exactly once per connection.
    pub fn transport_connected(&mut self, local_id: impl Into<String>) -> Option<ClientEvent> {
        if self.phase != Phase::Connecting {
            warn!(phase = ?self.phase, "transport connected in unexpected phase, ignoring");
            return None;
        }
        self.local_id = Some(local_id.into());
        self.phase = Phase::AwaitingRoomData;
        Some(ClientEvent::Join {
            room_id: self.room_id.clone(),
            username: self.username.clone(),
            color: self.color,
        })
    }

    /// The transport dropped. All replicated state is discarded; the
    /// snapshot on the next join rebuilds it.
    pub fn transport_disconnected(&mut self) {
        info!(room = %self.room_id, "disconnected");
        self.phase = Phase::Disconnected;
        self.local_id = None;
        self.log.clear();
        self.participants.clear();
        self.chat.clear();
    }

    /// Leave the room deliberately. Returns the leave event to send if
    /// we were connected.
    pub fn leave(&mut self) -> Option<ClientEvent> {
        let event = (self.phase != Phase::Disconnected)
            .then(|| ClientEvent::Leave { room_id: self.room_id.clone() });
        self.transport_disconnected();
        event
    }

    // =============================================================
    // Inbound reconciliation
    // =============================================================

    /// Apply one inbound event. Returns whether the drawing log changed
    /// and the canvas needs a replay.
    pub fn apply(&mut self, event: ServerEvent) -> bool {
        match event {
            ServerEvent::RoomData(snapshot) => {
                debug!(
                    drawings = snapshot.drawings.len(),
                    users = snapshot.users.len(),
                    "room snapshot received"
                );
                self.log.replace_all(snapshot.drawings);
                self.participants = snapshot.users;
                self.chat = snapshot.chat;
                self.phase = Phase::Active;
                true
            }
            ServerEvent::Drawing(op) => {
                self.log.append(op);
                true
            }
            ServerEvent::CanvasCleared => {
                self.log.clear();
                true
            }
            ServerEvent::Undone => self.log.undo_last().is_some(),
            ServerEvent::UserJoined(user) => {
                if self.participants.iter().any(|p| p.id == user.id) {
                    debug!(user = %user.id, "duplicate user-joined, ignoring");
                } else {
                    self.participants.push(user);
                }
                false
            }
            ServerEvent::UserLeft(user_id) => {
                self.participants.retain(|p| p.id != user_id);
                false
            }
            ServerEvent::UsersUpdated(users) => {
                self.participants = users;
                false
            }
            ServerEvent::CursorUpdated { user_id, cursor } => {
                match self.participants.iter_mut().find(|p| p.id == user_id) {
                    Some(p) => p.cursor = Some(cursor),
                    // Tolerated: the cursor event raced ahead of the join.
                    None => debug!(user = %user_id, "cursor update for unknown user"),
                }
                false
            }
            ServerEvent::NewMessage(message) => {
                self.chat.push(message);
                false
            }
            ServerEvent::Error { message } => {
                warn!(%message, "server error");
                self.last_error = Some(message);
                false
            }
        }
    }

    // =============================================================
    // Outbound intents
    // =============================================================

    /// A drawing intent, or `None` when not joined.
    #[must_use]
    pub fn draw_intent(&self, op: DrawingOp) -> Option<ClientEvent> {
        self.is_joined()
            .then(|| ClientEvent::Draw { room_id: self.room_id.clone(), op })
    }

    /// A cursor position report, or `None` when not joined.
    #[must_use]
    pub fn cursor_intent(&self, at: Point) -> Option<ClientEvent> {
        self.is_joined()
            .then(|| ClientEvent::CursorMove { room_id: self.room_id.clone(), x: at.x, y: at.y })
    }

    #[must_use]
    pub fn clear_intent(&self) -> Option<ClientEvent> {
        self.is_joined()
            .then(|| ClientEvent::ClearCanvas { room_id: self.room_id.clone() })
    }

    #[must_use]
    pub fn undo_intent(&self) -> Option<ClientEvent> {
        self.is_joined()
            .then(|| ClientEvent::Undo { room_id: self.room_id.clone() })
    }

    /// A chat message intent. Whitespace-only input sends nothing.
    #[must_use]
    pub fn chat_intent(&self, message: &str) -> Option<ClientEvent> {
        let trimmed = message.trim();
        if trimmed.is_empty() || !self.is_joined() {
            return None;
        }
        Some(ClientEvent::SendMessage {
            room_id: self.room_id.clone(),
            message: trimmed.to_owned(),
        })
    }
}
