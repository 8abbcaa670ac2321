//! Room Directory: room name to members and history.

use std::{collections::HashMap, sync::Arc};

use roomcast_shared::time::Clock;

use super::{
    entity::{ChatMessage, Room, RoomSummary},
    value_object::{ConnectionId, RoomName, Timestamp},
};

/// Rooms are created lazily and never deleted.
pub struct RoomDirectory {
    rooms: HashMap<RoomName, Room>,
    clock: Arc<dyn Clock>,
}

impl RoomDirectory {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            rooms: HashMap::new(),
            clock,
        }
    }

    /// Create the room if it does not exist yet.
    ///
    /// Returns `true` only when the room was newly created.
    pub fn ensure_room(&mut self, name: &RoomName) -> bool {
        if self.rooms.contains_key(name) {
            return false;
        }
        self.room_mut(name);
        true
    }

    pub fn join(&mut self, name: &RoomName, id: ConnectionId) {
        self.room_mut(name).members.insert(id);
    }

    /// Remove `id` from the room's members. Unknown rooms and ids are ignored.
    pub fn leave(&mut self, name: &RoomName, id: &ConnectionId) {
        if let Some(room) = self.rooms.get_mut(name) {
            room.members.remove(id);
        }
    }

    /// History in arrival order. Reading never creates the room.
    pub fn history(&self, name: &RoomName) -> &[ChatMessage] {
        self.rooms
            .get(name)
            .map(|room| room.history.as_slice())
            .unwrap_or_default()
    }

    /// Append to the room's history and return the new history length.
    pub fn append(&mut self, name: &RoomName, message: ChatMessage) -> usize {
        let room = self.room_mut(name);
        room.history.push(message);
        room.history.len()
    }

    pub fn members(&self, name: &RoomName) -> Vec<ConnectionId> {
        self.rooms
            .get(name)
            .map(|room| room.members.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn contains(&self, name: &RoomName) -> bool {
        self.rooms.contains_key(name)
    }

    pub fn get(&self, name: &RoomName) -> Option<&Room> {
        self.rooms.get(name)
    }

    /// Summaries of every room sorted by name
    pub fn summaries(&self) -> Vec<RoomSummary> {
        let mut summaries: Vec<RoomSummary> = self.rooms.values().map(Room::summary).collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        summaries
    }

    fn room_mut(&mut self, name: &RoomName) -> &mut Room {
        let clock = &self.clock;
        self.rooms
            .entry(name.clone())
            .or_insert_with(|| Room::new(name.clone(), Timestamp::new(clock.now_millis())))
    }
}
