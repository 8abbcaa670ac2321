//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続ごとの `UnboundedSender` を保持し、フレームをキューに積む
//!
//! ## 設計ノート
//!
//! ソケットへの書き込みは UI 層のプッシャータスク（`ui/handler/websocket.rs`）が
//! 受信側チャンネルを読み出して行います。書き込みに失敗するとタスクが終了して
//! 受信側が破棄されるため、以降の `push` は `ChannelClosed` を返します。
//! 逆に、この pusher を破棄すると受信側が `None` を受け取り、接続が閉じられます。

use tokio::sync::mpsc;

use crate::domain::{MessagePushError, MessagePusher};

/// Sending half of a connection's outbound frame queue
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// WebSocket を使った MessagePusher 実装
pub struct WebSocketMessagePusher {
    sender: PusherChannel,
}

impl WebSocketMessagePusher {
    /// 新しい WebSocketMessagePusher を作成
    pub fn new(sender: PusherChannel) -> Self {
        Self { sender }
    }
}

impl MessagePusher for WebSocketMessagePusher {
    fn push(&self, frame: &str) -> Result<(), MessagePushError> {
        self.sender
            .send(frame.to_string())
            .map_err(|e| MessagePushError::ChannelClosed(e.to_string()))
    }
}
