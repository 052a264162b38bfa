//! Wire protocol: the JSON room events exchanged with the server.
//!
//! Every event is an object with an `event` tag and a `payload`. All
//! outbound payloads carry the `roomId`; the server scopes broadcasts by
//! room, so inbound events arrive already room-filtered and carry no
//! room field. Inbound decode is deliberately tolerant: collection
//! fields missing from a snapshot default to empty rather than failing
//! the whole event.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use canvas::geom::{Color, Point};
use canvas::op::DrawingOp;
use serde::{Deserialize, Serialize};

use crate::types::{ChatMessage, Participant};

/// Codec failure for a single wire event.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("failed to encode outbound event: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode inbound event: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Events the client sends to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "payload",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ClientEvent {
    /// Announce identity and ask for the room snapshot.
    Join { room_id: String, username: String, color: Color },
    Leave { room_id: String },
    /// A drawing intent. Confirmation arrives as an inbound `drawing`.
    Draw {
        room_id: String,
        #[serde(flatten)]
        op: DrawingOp,
    },
    CursorMove { room_id: String, x: f64, y: f64 },
    ClearCanvas { room_id: String },
    Undo { room_id: String },
    SendMessage { room_id: String, message: String },
}

/// Events the server broadcasts to the room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "payload",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ServerEvent {
    /// Authoritative snapshot sent once after a join is accepted.
    RoomData(RoomSnapshot),
    Drawing(DrawingOp),
    UserJoined(Participant),
    /// Carries the departed user's id.
    UserLeft(String),
    UsersUpdated(Vec<Participant>),
    CanvasCleared,
    Undone,
    NewMessage(ChatMessage),
    CursorUpdated { user_id: String, cursor: Point },
    Error {
        #[serde(default)]
        message: String,
    },
}

/// The full room state at join time. Fields the server omits decode as
/// empty collections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSnapshot {
    #[serde(default)]
    pub drawings: Vec<DrawingOp>,
    #[serde(default)]
    pub users: Vec<Participant>,
    #[serde(default)]
    pub chat: Vec<ChatMessage>,
}

/// Encode one outbound event as a JSON text frame.
pub fn encode_client_event(event: &ClientEvent) -> Result<String, WireError> {
    serde_json::to_string(event).map_err(WireError::Encode)
}

/// Decode one inbound JSON text frame.
pub fn decode_server_event(frame: &str) -> Result<ServerEvent, WireError> {
    serde_json::from_str(frame).map_err(WireError::Decode)
}
