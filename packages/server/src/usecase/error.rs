//! UseCase layer errors.

use thiserror::Error;

use crate::domain::{RepositoryError, ValueObjectError};

/// メッセージ送信のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendMessageError {
    #[error("failed to store and broadcast message: {0}")]
    Repository(#[from] RepositoryError),
}

/// ルーム作成アナウンスのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnounceRoomError {
    #[error("invalid room name: {0}")]
    InvalidRoomName(#[from] ValueObjectError),
    #[error("failed to announce room: {0}")]
    Repository(#[from] RepositoryError),
}

/// ルーム履歴取得のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetRoomHistoryError {
    #[error("invalid room name: {0}")]
    InvalidRoomName(#[from] ValueObjectError),
    #[error("room not found")]
    RoomNotFound,
}
