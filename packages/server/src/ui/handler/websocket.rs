//! Room channel: the per-connection session handler.
//!
//! Session states: Connecting → Joined → Streaming → Closed.
//!
//! - Connecting: the room name is validated before the upgrade.
//! - Joined: the connection is registered, joined and sent the room history.
//! - Streaming: every inbound chat frame is stored and broadcast to the room.
//! - Closed: the connection is removed from its room and the registry.

use std::sync::Arc;

use axum::{
    extract::{
        Path, State,
        ws::{Message, WebSocket, WebSocketUpgrade, rejection::WebSocketUpgradeRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use futures_util::{
    sink::{Sink, SinkExt},
    stream::{SplitStream, StreamExt},
};
use tokio::sync::mpsc;

use crate::{
    domain::RoomName,
    infrastructure::{dto::websocket as dto, message_pusher::WebSocketMessagePusher},
    ui::state::AppState,
};

use super::{Inbound, classify, is_expected_close};

const ROOM_NAME_REQUIRED: &str = "Room name is required";

/// `/ws` and `/ws/` without a room segment
pub async fn missing_room_handler() -> (StatusCode, &'static str) {
    tracing::warn!("Rejected room connection without a room name");
    (StatusCode::BAD_REQUEST, ROOM_NAME_REQUIRED)
}

/// `/ws/{*room}`: validate the room, then upgrade and run the session
pub async fn room_socket_handler(
    State(state): State<Arc<AppState>>,
    Path(room_name): Path<String>,
    ws: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
) -> Response {
    let room = match RoomName::try_from(room_name) {
        Ok(room) => room,
        Err(e) => {
            tracing::warn!("Rejected room connection: {}", e);
            return (StatusCode::BAD_REQUEST, ROOM_NAME_REQUIRED).into_response();
        }
    };

    let ws = match ws {
        Ok(ws) => ws,
        Err(rejection) => {
            tracing::warn!("Failed to upgrade to WebSocket: {}", rejection);
            return rejection.into_response();
        }
    };

    ws.on_failed_upgrade(|e| tracing::warn!("Failed to upgrade to WebSocket: {}", e))
        .on_upgrade(move |socket| handle_socket(socket, state, room))
}

/// Drain the connection's outbound queue into the socket.
///
/// Ends when the socket write fails or the queue is closed because the
/// connection was purged.
fn pusher_loop<S>(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: S,
) -> tokio::task::JoinHandle<()>
where
    S: Sink<Message> + Unpin + Send + 'static,
    S::Error: std::fmt::Display,
{
    tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if let Err(e) = sender.send(Message::Text(frame.into())).await {
                tracing::warn!("Failed to write frame: {}", e);
                break;
            }
        }
        let _ = sender.close().await;
    })
}

/// Read chat frames until the peer disconnects or sends something that is
/// not a chat message.
async fn receive_loop(
    mut receiver: SplitStream<WebSocket>,
    state: Arc<AppState>,
    room: RoomName,
) {
    while let Some(frame) = receiver.next().await {
        let frame = match frame {
            Ok(frame) => frame,
            Err(e) => {
                tracing::warn!("Unexpected WebSocket closure in room {}: {}", room, e);
                return;
            }
        };

        let payload = match classify(&frame) {
            Inbound::Payload(payload) => payload,
            Inbound::Skip => continue,
            Inbound::Close(close) => {
                if is_expected_close(close) {
                    tracing::info!("User disconnected from room: {}", room);
                } else {
                    tracing::warn!("Unexpected WebSocket closure in room {}: {:?}", room, close);
                }
                return;
            }
        };

        let message = match serde_json::from_slice::<dto::ChatMessage>(payload) {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!("Malformed message in room {}, closing: {}", room, e);
                return;
            }
        };

        if let Err(e) = state
            .send_message_usecase
            .execute(&room, message.into())
            .await
        {
            tracing::warn!("Failed to send message to room {}: {}", room, e);
        }
    }
    tracing::info!("User disconnected from room: {}", room);
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, room: RoomName) {
    let (sender, receiver) = socket.split();

    // Joined: frames queued here (history first) are written in order by the pusher loop
    let (tx, rx) = mpsc::unbounded_channel();
    let joined = state
        .join_room_usecase
        .execute(room.clone(), Box::new(WebSocketMessagePusher::new(tx)))
        .await;
    tracing::debug!(
        "Connection {} joined room {} ({} messages replayed)",
        joined.id,
        room,
        joined.replay.replayed
    );

    // Streaming
    let mut send_task = pusher_loop(rx, sender);
    let mut recv_task = tokio::spawn(receive_loop(receiver, state.clone(), room.clone()));

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Closed
    if state.leave_room_usecase.execute(&joined.id).await {
        tracing::debug!("Connection {} removed from room {}", joined.id, room);
    } else {
        tracing::debug!("Connection {} was already purged from room {}", joined.id, room);
    }
}
