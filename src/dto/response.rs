use super::Details;
use super::Snapshot;
use serde::Deserialize;
use serde::Serialize;

/// Messages sent from server to client over WebSocket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ServerMessage {
    /// Seat assignment for the host or the joiner, sent only to them.
    Details(Details),
    /// Session state, broadcast to every participant of the session.
    State(Snapshot),
    /// The other participant disconnected and the session was removed.
    OpponentLeft { game_id: String },
    /// Rejected request, sent only to the requester.
    Error { message: String },
}

impl ServerMessage {
    pub fn error<E>(e: E) -> Self
    where
        E: std::fmt::Display,
    {
        Self::Error {
            message: e.to_string(),
        }
    }
    pub fn opponent_left<T>(game: crate::ID<T>) -> Self {
        Self::OpponentLeft {
            game_id: game.to_string(),
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize server message")
    }
}

impl From<Snapshot> for ServerMessage {
    fn from(snapshot: Snapshot) -> Self {
        Self::State(snapshot)
    }
}

impl From<Details> for ServerMessage {
    fn from(details: Details) -> Self {
        Self::Details(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameError;
    use crate::Unique;
    use crate::gameroom::Session;
    #[test]
    fn tagged_state_keeps_snapshot_fields_inline() {
        let session = Session::default();
        let json: serde_json::Value =
            serde_json::from_str(&ServerMessage::from(session.snapshot()).to_json()).unwrap();
        assert_eq!(json["type"], "state");
        assert_eq!(json["status"], "WAITING_FOR_PLAYER");
    }
    #[test]
    fn errors_carry_display_text() {
        let json: serde_json::Value =
            serde_json::from_str(&ServerMessage::error(GameError::OutOfTurn).to_json()).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["message"], GameError::OutOfTurn.to_string());
    }
    #[test]
    fn opponent_left_names_the_game() {
        let session = Session::default();
        let json: serde_json::Value =
            serde_json::from_str(&ServerMessage::opponent_left(session.id()).to_json()).unwrap();
        assert_eq!(json["type"], "opponent_left");
        assert_eq!(json["gameId"], session.id().to_string());
    }
}
