//! Room membership and chat data carried between clients.

use canvas::geom::{Color, Point};
use serde::{Deserialize, Serialize};

/// One connected user as the room sees them.
///
/// The `id` is transport-assigned and opaque; it is stable for the
/// lifetime of that user's connection and is the only key used to match
/// cursor updates and departures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    pub username: String,
    pub color: Color,
    /// Unix timestamp (ms) of when the user joined.
    pub joined_at: i64,
    /// Last reported cursor position; absent until the first report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Point>,
}

/// One chat transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub color: Color,
    pub message: String,
    /// Unix timestamp (ms) assigned by the server.
    pub timestamp: i64,
}
