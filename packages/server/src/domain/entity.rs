//! Domain entities.

use std::collections::HashSet;

use super::value_object::{ConnectionId, RoomName, Timestamp};

/// A chat event sent by a client. Never mutated once stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub username: String,
    pub content: String,
    /// May be empty when the client sent no image
    pub image: String,
}

impl ChatMessage {
    pub fn new(username: String, content: String, image: String) -> Self {
        Self {
            username,
            content,
            image,
        }
    }
}

/// A named channel with its members and append-only history.
#[derive(Debug, Clone)]
pub struct Room {
    pub name: RoomName,
    pub members: HashSet<ConnectionId>,
    pub history: Vec<ChatMessage>,
    pub created_at: Timestamp,
}

impl Room {
    pub fn new(name: RoomName, created_at: Timestamp) -> Self {
        Self {
            name,
            members: HashSet::new(),
            history: Vec::new(),
            created_at,
        }
    }

    pub fn summary(&self) -> RoomSummary {
        RoomSummary {
            name: self.name.clone(),
            member_count: self.members.len(),
            message_count: self.history.len(),
            created_at: self.created_at,
        }
    }
}

/// Read-only view of a room for inspection endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSummary {
    pub name: RoomName,
    pub member_count: usize,
    pub message_count: usize,
    pub created_at: Timestamp,
}
