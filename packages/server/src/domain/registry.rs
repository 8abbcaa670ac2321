//! Connection Registry: every live room connection on the server.

use std::collections::HashMap;

use super::{
    pusher::MessagePusher,
    value_object::{ConnectionId, RoomName},
};

/// A registered connection together with the room it joined.
pub struct RegisteredConnection {
    pub room: RoomName,
    pub pusher: Box<dyn MessagePusher>,
}

/// Server-wide set of connections keyed by their generated id.
///
/// The registry owns the outbound handle of each connection; dropping an
/// entry drops the handle, which closes the connection's outbound channel.
#[derive(Default)]
pub struct ConnectionRegistry {
    connections: HashMap<ConnectionId, RegisteredConnection>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: ConnectionId, room: RoomName, pusher: Box<dyn MessagePusher>) {
        self.connections
            .insert(id, RegisteredConnection { room, pusher });
    }

    /// Remove a connection. Removing an absent id is a no-op.
    pub fn unregister(&mut self, id: &ConnectionId) -> Option<RegisteredConnection> {
        self.connections.remove(id)
    }

    pub fn get(&self, id: &ConnectionId) -> Option<&RegisteredConnection> {
        self.connections.get(id)
    }

    pub fn contains(&self, id: &ConnectionId) -> bool {
        self.connections.contains_key(id)
    }

    /// Apply `f` to every registered connection.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&ConnectionId, &RegisteredConnection),
    {
        for (id, connection) in &self.connections {
            f(id, connection);
        }
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}
