//! UseCase: ルーム履歴取得

use std::sync::Arc;

use crate::domain::{ChatMessage, RelayRepository, RoomName};

use super::error::GetRoomHistoryError;

/// ルーム履歴取得のユースケース
pub struct GetRoomHistoryUseCase {
    repository: Arc<dyn RelayRepository>,
}

impl GetRoomHistoryUseCase {
    pub fn new(repository: Arc<dyn RelayRepository>) -> Self {
        Self { repository }
    }

    /// ルームの履歴を到着順で取得する。存在しないルームは作成しない。
    pub async fn execute(
        &self,
        room_name: String,
    ) -> Result<Vec<ChatMessage>, GetRoomHistoryError> {
        let room = RoomName::try_from(room_name)?;
        self.repository
            .history(&room)
            .await
            .ok_or(GetRoomHistoryError::RoomNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::test_support::{create_test_repository, message, room};

    #[tokio::test]
    async fn test_get_history_of_existing_room() {
        // テスト項目: 既存ルームの履歴が到着順で取得できる
        // given (前提条件):
        let repository = create_test_repository();
        repository
            .publish(&room("lobby"), message("a", "1"))
            .await
            .unwrap();
        repository
            .publish(&room("lobby"), message("b", "2"))
            .await
            .unwrap();
        let usecase = GetRoomHistoryUseCase::new(repository.clone());

        // when (操作):
        let history = usecase.execute("lobby".to_string()).await;

        // then (期待する結果):
        assert_eq!(history, Ok(vec![message("a", "1"), message("b", "2")]));
    }

    #[tokio::test]
    async fn test_get_history_of_unknown_room() {
        // テスト項目: 存在しないルームは RoomNotFound になり、作成もされない
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = GetRoomHistoryUseCase::new(repository.clone());

        // when (操作):
        let history = usecase.execute("ghost".to_string()).await;

        // then (期待する結果):
        assert_eq!(history, Err(GetRoomHistoryError::RoomNotFound));
        assert!(repository.list_rooms().await.is_empty());
    }
}
