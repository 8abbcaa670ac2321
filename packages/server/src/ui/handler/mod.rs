//! HTTP and WebSocket handlers.

mod announce;
mod http;
mod websocket;

pub use announce::announce_socket_handler;
pub use http::{get_room_history, get_rooms, health_check};
pub use websocket::{missing_room_handler, room_socket_handler};

use axum::extract::ws::{CloseFrame, Message, close_code};

/// How a session loop should treat one inbound frame
enum Inbound<'a> {
    /// JSON payload to decode
    Payload(&'a [u8]),
    /// Control frame handled by the protocol layer
    Skip,
    /// Peer asked to close the connection
    Close(Option<&'a CloseFrame>),
}

fn classify(message: &Message) -> Inbound<'_> {
    match message {
        Message::Text(text) => Inbound::Payload(text.as_bytes()),
        Message::Binary(bytes) => Inbound::Payload(&bytes[..]),
        Message::Ping(_) | Message::Pong(_) => Inbound::Skip,
        Message::Close(frame) => Inbound::Close(frame.as_ref()),
    }
}

/// Whether a close frame is an ordinary disconnect.
///
/// Only affects which diagnostic is logged.
fn is_expected_close(frame: Option<&CloseFrame>) -> bool {
    match frame {
        None => true,
        Some(frame) => matches!(frame.code, close_code::NORMAL | close_code::AWAY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_payload_frames() {
        // テスト項目: テキスト・バイナリフレームはペイロードとして扱われる
        // given (前提条件):
        let text = Message::Text("{}".into());
        let binary = Message::Binary(vec![b'{', b'}'].into());

        // when (操作):
        let classified = [classify(&text), classify(&binary)];

        // then (期待する結果):
        for inbound in classified {
            assert!(matches!(inbound, Inbound::Payload(b"{}")));
        }
    }

    #[test]
    fn test_classify_control_frames() {
        // テスト項目: Ping/Pong はスキップされ、Close は終了として扱われる
        // given (前提条件):
        let ping = Message::Ping(Vec::<u8>::new().into());
        let close = Message::Close(None);

        // when (操作):
        let ping = classify(&ping);
        let close = classify(&close);

        // then (期待する結果):
        assert!(matches!(ping, Inbound::Skip));
        assert!(matches!(close, Inbound::Close(None)));
    }

    #[test]
    fn test_close_code_classification() {
        // テスト項目: 正常・離脱のクローズは通常の切断、それ以外は予期しない切断と判定される
        // given (前提条件):
        let normal = CloseFrame {
            code: close_code::NORMAL,
            reason: "bye".into(),
        };
        let away = CloseFrame {
            code: close_code::AWAY,
            reason: "".into(),
        };
        let error = CloseFrame {
            code: close_code::ERROR,
            reason: "boom".into(),
        };

        // when (操作) / then (期待する結果):
        assert!(is_expected_close(None));
        assert!(is_expected_close(Some(&normal)));
        assert!(is_expected_close(Some(&away)));
        assert!(!is_expected_close(Some(&error)));
    }
}
