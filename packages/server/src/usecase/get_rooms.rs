//! UseCase: ルーム一覧取得

use std::sync::Arc;

use crate::domain::{RelayRepository, RoomSummary};

/// ルーム一覧取得のユースケース
pub struct GetRoomsUseCase {
    repository: Arc<dyn RelayRepository>,
}

impl GetRoomsUseCase {
    pub fn new(repository: Arc<dyn RelayRepository>) -> Self {
        Self { repository }
    }

    /// 全ルームの概要を名前順で取得
    pub async fn execute(&self) -> Vec<RoomSummary> {
        self.repository.list_rooms().await
    }

    /// 接続中のルーム接続数を取得
    pub async fn count_connections(&self) -> usize {
        self.repository.count_connections().await
    }
}
