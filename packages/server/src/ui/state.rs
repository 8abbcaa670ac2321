//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::{
    domain::RelayRepository,
    usecase::{
        AnnounceRoomUseCase, GetRoomHistoryUseCase, GetRoomsUseCase, JoinRoomUseCase,
        LeaveRoomUseCase, SendMessageUseCase,
    },
};

/// Shared application state
pub struct AppState {
    /// JoinRoomUseCase（ルーム参加と履歴再送）
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    /// LeaveRoomUseCase（接続の削除）
    pub leave_room_usecase: Arc<LeaveRoomUseCase>,
    /// SendMessageUseCase（メッセージの保存とブロードキャスト）
    pub send_message_usecase: Arc<SendMessageUseCase>,
    /// AnnounceRoomUseCase（ルーム作成の通知）
    pub announce_room_usecase: Arc<AnnounceRoomUseCase>,
    /// GetRoomsUseCase（ルーム一覧の取得）
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    /// GetRoomHistoryUseCase（ルーム履歴の取得）
    pub get_room_history_usecase: Arc<GetRoomHistoryUseCase>,
}

impl AppState {
    /// Build every use case on top of one shared repository.
    pub fn new(repository: Arc<dyn RelayRepository>) -> Self {
        Self {
            join_room_usecase: Arc::new(JoinRoomUseCase::new(repository.clone())),
            leave_room_usecase: Arc::new(LeaveRoomUseCase::new(repository.clone())),
            send_message_usecase: Arc::new(SendMessageUseCase::new(repository.clone())),
            announce_room_usecase: Arc::new(AnnounceRoomUseCase::new(repository.clone())),
            get_rooms_usecase: Arc::new(GetRoomsUseCase::new(repository.clone())),
            get_room_history_usecase: Arc::new(GetRoomHistoryUseCase::new(repository)),
        }
    }
}
