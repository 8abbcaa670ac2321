//! WebSocket frame DTOs.

use serde::{Deserialize, Serialize};

/// Chat frame, identical in both directions on the room channel.
///
/// Missing fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatMessage {
    pub username: String,
    pub content: String,
    pub image: String,
}

/// Frame pushed to every registered connection when a room is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCreatedMessage {
    pub new_room: String,
}

/// Payload of a frame on the room-announcement channel: a bare JSON string.
pub type RoomAnnouncement = String;
