//! Outbound side of a connection.
//!
//! The domain only knows that a frame can be pushed to a connection and that
//! the push may fail. How frames reach the socket is an infrastructure concern.

use super::{
    entity::ChatMessage,
    error::{FrameEncodeError, MessagePushError},
    value_object::RoomName,
};

/// Handle used to write frames to one connected peer.
///
/// Implementations must not block: pushes happen while the shared relay
/// lock is held.
#[cfg_attr(test, mockall::automock)]
pub trait MessagePusher: Send + Sync {
    /// Push one frame to the peer.
    fn push(&self, frame: &str) -> Result<(), MessagePushError>;
}

/// Turns domain events into wire frames.
pub trait FrameEncoder: Send + Sync {
    fn encode_message(&self, message: &ChatMessage) -> Result<String, FrameEncodeError>;

    fn encode_room_created(&self, room: &RoomName) -> Result<String, FrameEncodeError>;
}
