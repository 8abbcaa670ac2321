//! Conversion logic between DTOs and domain entities.

use crate::domain::entity;
use crate::infrastructure::dto::{http, websocket as dto};
use roomcast_shared::time::timestamp_to_rfc3339;

// ========================================
// DTO → Domain Entity
// ========================================

impl From<dto::ChatMessage> for entity::ChatMessage {
    fn from(dto: dto::ChatMessage) -> Self {
        Self::new(dto.username, dto.content, dto.image)
    }
}

// ========================================
// Domain Entity → DTO
// ========================================

impl From<&entity::ChatMessage> for dto::ChatMessage {
    fn from(model: &entity::ChatMessage) -> Self {
        Self {
            username: model.username.clone(),
            content: model.content.clone(),
            image: model.image.clone(),
        }
    }
}

impl From<entity::ChatMessage> for dto::ChatMessage {
    fn from(model: entity::ChatMessage) -> Self {
        Self {
            username: model.username,
            content: model.content,
            image: model.image,
        }
    }
}

impl From<entity::RoomSummary> for http::RoomSummaryDto {
    fn from(model: entity::RoomSummary) -> Self {
        Self {
            name: model.name.into_string(),
            members: model.member_count,
            messages: model.message_count,
            created_at: timestamp_to_rfc3339(model.created_at.value()),
        }
    }
}
