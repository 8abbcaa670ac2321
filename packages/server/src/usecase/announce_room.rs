//! UseCase: ルーム作成アナウンス処理
//!
//! アナウンス用の接続はレジストリに登録されないため、自分が起こした
//! ルーム作成通知を受け取ることはありません。

use std::sync::Arc;

use crate::domain::{RelayRepository, RoomName};

use super::error::AnnounceRoomError;

/// ルーム作成アナウンスのユースケース
pub struct AnnounceRoomUseCase {
    repository: Arc<dyn RelayRepository>,
}

impl AnnounceRoomUseCase {
    pub fn new(repository: Arc<dyn RelayRepository>) -> Self {
        Self { repository }
    }

    /// ルームを作成し、新規であれば全接続に通知する
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - ルームが新規に作成され、通知された
    /// * `Ok(false)` - ルームは既に存在していた（何もしない）
    /// * `Err(AnnounceRoomError)` - ルーム名が空、または通知の失敗
    pub async fn execute(&self, room_name: String) -> Result<bool, AnnounceRoomError> {
        let room = RoomName::try_from(room_name)?;
        match self.repository.announce_room(&room).await? {
            Some(report) => {
                tracing::info!(
                    "Room {} created, notified {} connections",
                    room,
                    report.delivered
                );
                Ok(true)
            }
            None => {
                tracing::debug!("Room {} already exists", room);
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ConnectionIdFactory, ValueObjectError},
        infrastructure::message_pusher::WebSocketMessagePusher,
        usecase::test_support::{create_test_repository, room},
    };
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_announce_new_room_notifies_once() {
        // テスト項目: 同じルーム名を二回アナウンスしても通知は一回だけ
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = AnnounceRoomUseCase::new(repository.clone());
        let (tx, mut rx) = mpsc::unbounded_channel();
        repository
            .attach(
                room("lobby"),
                ConnectionIdFactory::generate(),
                Box::new(WebSocketMessagePusher::new(tx)),
            )
            .await;

        // when (操作):
        let first = usecase.execute("x".to_string()).await;
        let second = usecase.execute("x".to_string()).await;

        // then (期待する結果):
        assert_eq!(first, Ok(true));
        assert_eq!(second, Ok(false));
        assert_eq!(rx.recv().await, Some(r#"{"newRoom":"x"}"#.to_string()));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_announce_blank_room_name_is_rejected() {
        // テスト項目: 空のルーム名は拒否され、ルームは作成されない
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = AnnounceRoomUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute("  ".to_string()).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(AnnounceRoomError::InvalidRoomName(
                ValueObjectError::EmptyRoomName
            ))
        );
        assert!(repository.list_rooms().await.is_empty());
    }

    #[tokio::test]
    async fn test_announced_room_is_listed_with_empty_history() {
        // テスト項目: アナウンスされたルームは空の履歴を持つ
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = AnnounceRoomUseCase::new(repository.clone());

        // when (操作):
        usecase.execute("general".to_string()).await.unwrap();

        // then (期待する結果):
        assert_eq!(repository.history(&room("general")).await, Some(Vec::new()));
    }
}
