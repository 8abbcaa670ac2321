//! UseCase layer: one struct per operation the UI layer can trigger.

mod announce_room;
mod error;
mod get_room_history;
mod get_rooms;
mod join_room;
mod leave_room;
mod send_message;

pub use announce_room::AnnounceRoomUseCase;
pub use error::{AnnounceRoomError, GetRoomHistoryError, SendMessageError};
pub use get_room_history::GetRoomHistoryUseCase;
pub use get_rooms::GetRoomsUseCase;
pub use join_room::{JoinRoomUseCase, JoinedConnection};
pub use leave_room::LeaveRoomUseCase;
pub use send_message::SendMessageUseCase;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use roomcast_shared::time::FixedClock;

    use crate::{
        domain::{ChatMessage, RoomName},
        infrastructure::{dto::JsonFrameEncoder, repository::InMemoryRelayRepository},
    };

    pub fn create_test_repository() -> Arc<InMemoryRelayRepository> {
        Arc::new(InMemoryRelayRepository::new(
            Arc::new(FixedClock::new(0)),
            Arc::new(JsonFrameEncoder),
        ))
    }

    pub fn room(name: &str) -> RoomName {
        RoomName::new(name.to_string()).unwrap()
    }

    pub fn message(username: &str, content: &str) -> ChatMessage {
        ChatMessage::new(username.to_string(), content.to_string(), String::new())
    }
}
