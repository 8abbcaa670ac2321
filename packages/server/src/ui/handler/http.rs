//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    infrastructure::dto::{
        http::{HealthDto, RoomSummaryDto},
        websocket::ChatMessage,
    },
    ui::state::AppState,
    usecase::GetRoomHistoryError,
};

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
        connections: state.get_rooms_usecase.count_connections().await,
    })
}

/// Get list of rooms
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let rooms = state.get_rooms_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(rooms.into_iter().map(RoomSummaryDto::from).collect())
}

/// Get the message history of a room
pub async fn get_room_history(
    State(state): State<Arc<AppState>>,
    Path(room): Path<String>,
) -> Result<Json<Vec<ChatMessage>>, StatusCode> {
    match state.get_room_history_usecase.execute(room).await {
        Ok(history) => Ok(Json(history.into_iter().map(ChatMessage::from).collect())),
        Err(GetRoomHistoryError::InvalidRoomName(_)) => Err(StatusCode::BAD_REQUEST),
        Err(GetRoomHistoryError::RoomNotFound) => Err(StatusCode::NOT_FOUND),
    }
}
