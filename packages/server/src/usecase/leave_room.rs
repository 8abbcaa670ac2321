//! UseCase: ルーム退出処理

use std::sync::Arc;

use crate::domain::{ConnectionId, RelayRepository};

/// ルーム退出のユースケース
pub struct LeaveRoomUseCase {
    repository: Arc<dyn RelayRepository>,
}

impl LeaveRoomUseCase {
    pub fn new(repository: Arc<dyn RelayRepository>) -> Self {
        Self { repository }
    }

    /// 接続をレジストリとルームから削除する
    ///
    /// Returns `false` when the connection had already been purged, e.g. by a
    /// failed broadcast.
    pub async fn execute(&self, id: &ConnectionId) -> bool {
        self.repository.detach(id).await
    }
}
