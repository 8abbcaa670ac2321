//! Domain layer errors.

use thiserror::Error;

/// Value Object の生成に失敗した場合のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    /// Room name is empty or consists only of whitespace
    #[error("room name is required")]
    EmptyRoomName,
}

/// メッセージ送信（push）に失敗した場合のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    /// The outbound channel of the connection has been closed
    #[error("connection channel closed: {0}")]
    ChannelClosed(String),
}

/// Failed to turn a domain event into a wire frame
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to encode frame: {0}")]
pub struct FrameEncodeError(pub String);

/// Repository 操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Encode(#[from] FrameEncodeError),
}
