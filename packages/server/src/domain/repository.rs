//! Repository trait 定義
//!
//! ドメイン層が必要とする共有状態へのインターフェースを定義します。
//! 具体的な実装（ロックの持ち方を含む）は Infrastructure 層が提供します。

use async_trait::async_trait;

use super::{
    BroadcastReport, ChatMessage, ConnectionId, MessagePusher, ReplayReport, RepositoryError,
    RoomName, RoomSummary,
};

/// Relay Repository trait
///
/// Every method is one logical operation on the shared relay state and is
/// serialized with all other operations.
#[async_trait]
pub trait RelayRepository: Send + Sync {
    /// 接続を登録し、ルームに参加させ、履歴をその接続だけに再送する
    async fn attach(
        &self,
        room: RoomName,
        id: ConnectionId,
        pusher: Box<dyn MessagePusher>,
    ) -> ReplayReport;

    /// 接続をレジストリとルームの両方から削除する（冪等）
    async fn detach(&self, id: &ConnectionId) -> bool;

    /// メッセージを履歴に追加し、ルームのメンバーにブロードキャストする
    async fn publish(
        &self,
        room: &RoomName,
        message: ChatMessage,
    ) -> Result<BroadcastReport, RepositoryError>;

    /// ルームを作成し、新規の場合のみ全接続に通知する
    async fn announce_room(
        &self,
        room: &RoomName,
    ) -> Result<Option<BroadcastReport>, RepositoryError>;

    /// ルームの履歴を到着順で取得（存在しないルームは作成しない）
    async fn history(&self, room: &RoomName) -> Option<Vec<ChatMessage>>;

    /// 全ルームの概要を取得
    async fn list_rooms(&self) -> Vec<RoomSummary>;

    /// 登録中の接続数を取得
    async fn count_connections(&self) -> usize;
}
