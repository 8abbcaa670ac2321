//! Room-scoped WebSocket broadcast relay.
//!
//! Clients join a room over `/ws/{room}`, receive the room's history and then
//! every message sent to that room. A separate `/create-room` channel
//! announces new rooms to every connected client.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
