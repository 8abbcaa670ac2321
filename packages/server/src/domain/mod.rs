//! Domain layer: rooms, connections and the rules of the relay.

pub mod directory;
pub mod entity;
pub mod error;
pub mod pusher;
pub mod registry;
pub mod relay;
pub mod repository;
pub mod value_object;

pub use directory::RoomDirectory;
pub use entity::{ChatMessage, Room, RoomSummary};
pub use error::{FrameEncodeError, MessagePushError, RepositoryError, ValueObjectError};
pub use pusher::{FrameEncoder, MessagePusher};
pub use registry::{ConnectionRegistry, RegisteredConnection};
pub use relay::{BroadcastReport, RelayState, ReplayReport};
pub use repository::RelayRepository;
pub use value_object::{ConnectionId, ConnectionIdFactory, RoomName, Timestamp};
