//! InMemory Relay Repository 実装
//!
//! ドメイン層が定義する RelayRepository trait の具体的な実装。
//! レジストリとルームディレクトリを `RelayState` として一つの Mutex で保護します。
//! ルームをまたいだ操作も含め、全ての変更はこのロックで直列化されます。
//!
//! プロセス再起動で全てのルームと履歴は失われます。

use std::sync::Arc;

use async_trait::async_trait;
use roomcast_shared::time::Clock;
use tokio::sync::Mutex;

use crate::domain::{
    BroadcastReport, ChatMessage, ConnectionId, FrameEncoder, MessagePusher, RelayRepository,
    RelayState, ReplayReport, RepositoryError, RoomName, RoomSummary,
};

/// インメモリ Relay Repository 実装
pub struct InMemoryRelayRepository {
    state: Mutex<RelayState>,
    encoder: Arc<dyn FrameEncoder>,
}

impl InMemoryRelayRepository {
    /// 空の状態から新しい InMemoryRelayRepository を作成
    pub fn new(clock: Arc<dyn Clock>, encoder: Arc<dyn FrameEncoder>) -> Self {
        Self {
            state: Mutex::new(RelayState::new(clock)),
            encoder,
        }
    }
}

#[async_trait]
impl RelayRepository for InMemoryRelayRepository {
    async fn attach(
        &self,
        room: RoomName,
        id: ConnectionId,
        pusher: Box<dyn MessagePusher>,
    ) -> ReplayReport {
        let mut state = self.state.lock().await;
        state.attach(room, id, pusher, self.encoder.as_ref())
    }

    async fn detach(&self, id: &ConnectionId) -> bool {
        let mut state = self.state.lock().await;
        state.purge(id)
    }

    async fn publish(
        &self,
        room: &RoomName,
        message: ChatMessage,
    ) -> Result<BroadcastReport, RepositoryError> {
        let mut state = self.state.lock().await;
        Ok(state.publish(room, message, self.encoder.as_ref())?)
    }

    async fn announce_room(
        &self,
        room: &RoomName,
    ) -> Result<Option<BroadcastReport>, RepositoryError> {
        let mut state = self.state.lock().await;
        Ok(state.announce(room, self.encoder.as_ref())?)
    }

    async fn history(&self, room: &RoomName) -> Option<Vec<ChatMessage>> {
        let state = self.state.lock().await;
        state
            .directory()
            .get(room)
            .map(|room| room.history.clone())
    }

    async fn list_rooms(&self) -> Vec<RoomSummary> {
        let state = self.state.lock().await;
        state.directory().summaries()
    }

    async fn count_connections(&self) -> usize {
        let state = self.state.lock().await;
        state.registry().len()
    }
}
