use crate::Pit;
use serde::Deserialize;
use serde::Serialize;

/// Messages sent from client to server over WebSocket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ClientMessage {
    /// Open a new game and take the first seat.
    Host,
    /// Take the second seat of an existing game.
    Join { game_id: String },
    /// Sow from a pit.
    Move { game_id: String, pit_index: Pit },
    /// Vote for another match once the game is finished.
    Rematch { game_id: String },
}

impl TryFrom<&str> for ClientMessage {
    type Error = serde_json::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn decode_client_messages() {
        assert_eq!(
            ClientMessage::try_from(r#"{"type":"host"}"#).unwrap(),
            ClientMessage::Host
        );
        assert_eq!(
            ClientMessage::try_from(r#"{"type":"move","gameId":"abc","pitIndex":3}"#).unwrap(),
            ClientMessage::Move {
                game_id: "abc".to_string(),
                pit_index: 3
            }
        );
        assert_eq!(
            ClientMessage::try_from(r#"{"type":"rematch","gameId":"abc"}"#).unwrap(),
            ClientMessage::Rematch {
                game_id: "abc".to_string()
            }
        );
    }
    #[test]
    fn decode_garbage() {
        assert!(ClientMessage::try_from("fold").is_err());
        assert!(ClientMessage::try_from(r#"{"type":"join"}"#).is_err());
        assert!(ClientMessage::try_from(r#"{"type":"move","gameId":"abc","pitIndex":-1}"#).is_err());
    }
}
