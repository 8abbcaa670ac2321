//! JSON implementation of the domain `FrameEncoder`.

use crate::domain::{ChatMessage, FrameEncodeError, FrameEncoder, RoomName};

use super::websocket::{self as dto, RoomCreatedMessage};

/// Encodes relay events as the JSON text frames clients expect.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFrameEncoder;

impl FrameEncoder for JsonFrameEncoder {
    fn encode_message(&self, message: &ChatMessage) -> Result<String, FrameEncodeError> {
        serde_json::to_string(&dto::ChatMessage::from(message))
            .map_err(|e| FrameEncodeError(e.to_string()))
    }

    fn encode_room_created(&self, room: &RoomName) -> Result<String, FrameEncodeError> {
        let update = RoomCreatedMessage {
            new_room: room.as_str().to_string(),
        };
        serde_json::to_string(&update).map_err(|e| FrameEncodeError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_message() {
        // テスト項目: メッセージが JSON テキストフレームにエンコードされる
        // given (前提条件):
        let message = ChatMessage::new("a".to_string(), "hi".to_string(), String::new());

        // when (操作):
        let frame = JsonFrameEncoder.encode_message(&message).unwrap();

        // then (期待する結果):
        assert_eq!(frame, r#"{"username":"a","content":"hi","image":""}"#);
    }

    #[test]
    fn test_encode_room_created_escapes_name() {
        // テスト項目: ルーム名に含まれる特殊文字がエスケープされる
        // given (前提条件):
        let room = RoomName::new(r#"say "hi""#.to_string()).unwrap();

        // when (操作):
        let frame = JsonFrameEncoder.encode_room_created(&room).unwrap();

        // then (期待する結果):
        assert_eq!(frame, r#"{"newRoom":"say \"hi\""}"#);
    }
}
