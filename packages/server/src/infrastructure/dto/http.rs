//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// Room summary for the room list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub name: String,
    /// Number of connected members
    pub members: usize,
    /// Number of stored messages
    pub messages: usize,
    /// RFC 3339 (UTC)
    pub created_at: String,
}

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    pub connections: usize,
}
