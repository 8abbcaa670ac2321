//! UseCase: ルーム参加処理
//!
//! 接続 ID を発行し、接続をレジストリに登録してルームに参加させ、
//! ルームの履歴をその接続だけに再送します。これらは一つのロック区間で行われるため、
//! 並行して送信されたメッセージが再送とライブ配信の両方で届くことはありません。

use std::sync::Arc;

use crate::domain::{
    ConnectionId, ConnectionIdFactory, MessagePusher, RelayRepository, ReplayReport, RoomName,
};

/// A connection that has joined a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedConnection {
    pub id: ConnectionId,
    pub room: RoomName,
    pub replay: ReplayReport,
}

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    /// Repository（共有状態の抽象化）
    repository: Arc<dyn RelayRepository>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(repository: Arc<dyn RelayRepository>) -> Self {
        Self { repository }
    }

    /// ルーム参加を実行
    ///
    /// # Arguments
    ///
    /// * `room` - 参加するルーム（検証済み）
    /// * `pusher` - この接続へのフレーム送信ハンドル
    pub async fn execute(
        &self,
        room: RoomName,
        pusher: Box<dyn MessagePusher>,
    ) -> JoinedConnection {
        let id = ConnectionIdFactory::generate();
        let replay = self.repository.attach(room.clone(), id, pusher).await;
        if replay.failed > 0 {
            tracing::warn!(
                "Failed to replay {} of {} messages to {} in room {}",
                replay.failed,
                replay.failed + replay.replayed,
                id,
                room
            );
        }
        JoinedConnection { id, room, replay }
    }
}
