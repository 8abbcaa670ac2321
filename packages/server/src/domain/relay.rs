//! Shared relay state and the broadcaster.
//!
//! `RelayState` is the single resource guarded by the relay lock: the
//! Connection Registry and the Room Directory live side by side so that
//! every logical operation (join + replay, append + fan-out, ensure +
//! announce, purge) is one step under one lock.
//!
//! Removal policy: a connection is always purged from both the registry and
//! the member set of its room, whichever path detects the failure.

use std::sync::Arc;

use roomcast_shared::time::Clock;

use super::{
    directory::RoomDirectory,
    entity::ChatMessage,
    error::FrameEncodeError,
    pusher::{FrameEncoder, MessagePusher},
    registry::ConnectionRegistry,
    value_object::{ConnectionId, RoomName},
};

/// Outcome of a fan-out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    /// Number of connections the frame was pushed to
    pub delivered: usize,
    /// Connections that failed to receive the frame and were purged
    pub purged: Vec<ConnectionId>,
}

/// Outcome of a history replay to a joining connection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayReport {
    pub replayed: usize,
    pub failed: usize,
}

pub struct RelayState {
    registry: ConnectionRegistry,
    directory: RoomDirectory,
}

impl RelayState {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            registry: ConnectionRegistry::new(),
            directory: RoomDirectory::new(clock),
        }
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    pub fn directory(&self) -> &RoomDirectory {
        &self.directory
    }

    /// Register a connection, join it to `room` and replay the room's
    /// history to it alone.
    ///
    /// A replay push failure is logged and does not undo the join.
    pub fn attach(
        &mut self,
        room: RoomName,
        id: ConnectionId,
        pusher: Box<dyn MessagePusher>,
        encoder: &dyn FrameEncoder,
    ) -> ReplayReport {
        self.directory.join(&room, id);
        tracing::info!(
            "User joined room: {}. Sending {} existing messages...",
            room,
            self.directory.history(&room).len()
        );

        let mut report = ReplayReport::default();
        for message in self.directory.history(&room) {
            let delivered = encoder
                .encode_message(message)
                .map_err(|e| e.to_string())
                .and_then(|frame| pusher.push(&frame).map_err(|e| e.to_string()));
            match delivered {
                Ok(()) => report.replayed += 1,
                Err(e) => {
                    tracing::warn!("Error sending message history to {}: {}", id, e);
                    report.failed += 1;
                }
            }
        }

        self.registry.register(id, room, pusher);
        report
    }

    /// Remove a connection from the registry and from its room.
    ///
    /// Returns `false` if the connection was not registered.
    pub fn purge(&mut self, id: &ConnectionId) -> bool {
        match self.registry.unregister(id) {
            Some(connection) => {
                self.directory.leave(&connection.room, id);
                true
            }
            None => false,
        }
    }

    /// Append `message` to the room's history and fan it out to the room's
    /// members as one step.
    ///
    /// Nothing is stored if the message cannot be encoded.
    pub fn publish(
        &mut self,
        room: &RoomName,
        message: ChatMessage,
        encoder: &dyn FrameEncoder,
    ) -> Result<BroadcastReport, FrameEncodeError> {
        let frame = encoder.encode_message(&message)?;
        let total = self.directory.append(room, message);
        tracing::debug!("Stored message in room: {}. Total messages: {}", room, total);
        Ok(self.broadcast_to_room(room, &frame))
    }

    /// Create `room` if it is new and announce it to every registered
    /// connection.
    ///
    /// Returns `Ok(None)` when the room already existed.
    pub fn announce(
        &mut self,
        room: &RoomName,
        encoder: &dyn FrameEncoder,
    ) -> Result<Option<BroadcastReport>, FrameEncodeError> {
        let frame = encoder.encode_room_created(room)?;
        if !self.directory.ensure_room(room) {
            return Ok(None);
        }
        Ok(Some(self.broadcast_room_created(&frame)))
    }

    /// Deliver `frame` to every member of `room`, purging members that fail.
    pub fn broadcast_to_room(&mut self, room: &RoomName, frame: &str) -> BroadcastReport {
        let mut report = BroadcastReport::default();
        for id in self.directory.members(room) {
            let delivered = match self.registry.get(&id) {
                Some(connection) => connection.pusher.push(frame).map_err(|e| e.to_string()),
                None => Err("connection is not registered".to_string()),
            };
            match delivered {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    tracing::warn!("Error broadcasting message to {} in {}: {}", id, room, e);
                    report.purged.push(id);
                }
            }
        }
        for id in &report.purged {
            self.directory.leave(room, id);
            self.registry.unregister(id);
        }
        report
    }

    /// Deliver `frame` to every registered connection, purging those that fail.
    pub fn broadcast_room_created(&mut self, frame: &str) -> BroadcastReport {
        let mut report = BroadcastReport::default();
        self.registry.for_each(|id, connection| match connection.pusher.push(frame) {
            Ok(()) => report.delivered += 1,
            Err(e) => {
                tracing::warn!("Error broadcasting new room to {}: {}", id, e);
                report.purged.push(*id);
            }
        });
        for id in &report.purged {
            self.purge(id);
        }
        report
    }
}
