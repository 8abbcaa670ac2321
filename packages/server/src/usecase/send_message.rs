//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - 履歴への追加とルームメンバーへのブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - 送信者自身を含むルームの全メンバーに届くことを保証
//! - Repository のエラーが UseCase のエラーに変換されることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：メッセージの保存と配信
//! - エッジケース：メンバーのいないルームへの送信
//! - 異常系：Repository の失敗

use std::sync::Arc;

use crate::domain::{BroadcastReport, ChatMessage, RelayRepository, RoomName};

use super::error::SendMessageError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Repository（共有状態の抽象化）
    repository: Arc<dyn RelayRepository>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(repository: Arc<dyn RelayRepository>) -> Self {
        Self { repository }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `room` - 送信先のルーム
    /// * `message` - 送信するメッセージ（Domain Model）
    ///
    /// # Returns
    ///
    /// * `Ok(BroadcastReport)` - 配信数と配信に失敗して削除された接続
    /// * `Err(SendMessageError)` - 保存・配信の失敗
    pub async fn execute(
        &self,
        room: &RoomName,
        message: ChatMessage,
    ) -> Result<BroadcastReport, SendMessageError> {
        let report = self.repository.publish(room, message).await?;
        if !report.purged.is_empty() {
            tracing::info!(
                "Removed {} unreachable connections from room {}",
                report.purged.len(),
                room
            );
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            ConnectionId, ConnectionIdFactory, FrameEncodeError, MessagePusher, ReplayReport,
            RepositoryError, RoomSummary,
        },
        infrastructure::message_pusher::WebSocketMessagePusher,
        usecase::test_support::{create_test_repository, message, room},
    };
    use tokio::sync::mpsc;

    // Repository that fails every write
    struct FailingRepository;

    #[async_trait::async_trait]
    impl RelayRepository for FailingRepository {
        async fn attach(
            &self,
            _room: RoomName,
            _id: ConnectionId,
            _pusher: Box<dyn MessagePusher>,
        ) -> ReplayReport {
            ReplayReport::default()
        }

        async fn detach(&self, _id: &ConnectionId) -> bool {
            false
        }

        async fn publish(
            &self,
            _room: &RoomName,
            _message: ChatMessage,
        ) -> Result<BroadcastReport, RepositoryError> {
            Err(FrameEncodeError("boom".to_string()).into())
        }

        async fn announce_room(
            &self,
            _room: &RoomName,
        ) -> Result<Option<BroadcastReport>, RepositoryError> {
            Err(FrameEncodeError("boom".to_string()).into())
        }

        async fn history(&self, _room: &RoomName) -> Option<Vec<ChatMessage>> {
            None
        }

        async fn list_rooms(&self) -> Vec<RoomSummary> {
            Vec::new()
        }

        async fn count_connections(&self) -> usize {
            0
        }
    }

    #[tokio::test]
    async fn test_send_message_reaches_all_members_including_sender() {
        // テスト項目: 送信者を含むルームの全メンバーにメッセージが届き、履歴に追加される
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = SendMessageUseCase::new(repository.clone());
        let (alice_tx, mut alice_rx) = mpsc::unbounded_channel();
        let (bob_tx, mut bob_rx) = mpsc::unbounded_channel();
        repository
            .attach(
                room("lobby"),
                ConnectionIdFactory::generate(),
                Box::new(WebSocketMessagePusher::new(alice_tx)),
            )
            .await;
        repository
            .attach(
                room("lobby"),
                ConnectionIdFactory::generate(),
                Box::new(WebSocketMessagePusher::new(bob_tx)),
            )
            .await;

        // when (操作): alice がメッセージを送信
        let result = usecase.execute(&room("lobby"), message("alice", "hi")).await;

        // then (期待する結果):
        let report = result.unwrap();
        assert_eq!(report.delivered, 2);
        assert!(report.purged.is_empty());
        let expected = Some(r#"{"username":"alice","content":"hi","image":""}"#.to_string());
        assert_eq!(alice_rx.recv().await, expected);
        assert_eq!(bob_rx.recv().await, expected);
        assert_eq!(
            repository.history(&room("lobby")).await,
            Some(vec![message("alice", "hi")])
        );
    }

    #[tokio::test]
    async fn test_send_message_to_room_without_members() {
        // テスト項目: メンバーのいないルームへの送信でも履歴には追加される
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = SendMessageUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute(&room("quiet"), message("a", "echo")).await;

        // then (期待する結果):
        assert_eq!(result, Ok(BroadcastReport::default()));
        assert_eq!(
            repository.history(&room("quiet")).await,
            Some(vec![message("a", "echo")])
        );
    }

    #[tokio::test]
    async fn test_send_message_repository_failure() {
        // テスト項目: Repository の失敗は SendMessageError に変換される
        // given (前提条件):
        let usecase = SendMessageUseCase::new(Arc::new(FailingRepository));

        // when (操作):
        let result = usecase.execute(&room("lobby"), message("a", "hi")).await;

        // then (期待する結果):
        assert!(matches!(result, Err(SendMessageError::Repository(_))));
    }
}
