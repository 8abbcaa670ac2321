//! Room-announcement channel.
//!
//! Each inbound frame is a bare JSON string naming a room. New rooms are
//! announced to every registered room connection. This connection is never
//! registered itself.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{WebSocket, WebSocketUpgrade},
    },
    response::Response,
};

use crate::{
    infrastructure::dto::websocket::RoomAnnouncement,
    ui::state::AppState,
    usecase::AnnounceRoomError,
};

use super::{Inbound, classify, is_expected_close};

/// `/create-room`
pub async fn announce_socket_handler(
    State(state): State<Arc<AppState>>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_failed_upgrade(|e| {
        tracing::warn!("Failed to upgrade connection for room creation: {}", e)
    })
    .on_upgrade(move |socket| handle_announcements(socket, state))
}

async fn handle_announcements(mut socket: WebSocket, state: Arc<AppState>) {
    while let Some(frame) = socket.recv().await {
        let frame = match frame {
            Ok(frame) => frame,
            Err(e) => {
                tracing::warn!("Error reading room name: {}", e);
                break;
            }
        };

        let payload = match classify(&frame) {
            Inbound::Payload(payload) => payload,
            Inbound::Skip => continue,
            Inbound::Close(close) => {
                if !is_expected_close(close) {
                    tracing::warn!("Unexpected closure of room creation channel: {:?}", close);
                }
                break;
            }
        };

        let room_name = match serde_json::from_slice::<RoomAnnouncement>(payload) {
            Ok(room_name) => room_name,
            Err(e) => {
                tracing::warn!("Error reading room name: {}", e);
                break;
            }
        };

        match state.announce_room_usecase.execute(room_name).await {
            Ok(_) => {}
            Err(AnnounceRoomError::InvalidRoomName(e)) => {
                tracing::warn!("Ignored room announcement: {}", e);
            }
            Err(e) => tracing::warn!("Failed to announce room: {}", e),
        }
    }
    tracing::debug!("Room creation channel closed");
}
