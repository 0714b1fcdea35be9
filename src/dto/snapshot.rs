use crate::CELLS;
use crate::Stones;
use crate::Unique;
use crate::gameplay::Seat;
use crate::gameroom::Session;
use crate::gameroom::Status;
use serde::Deserialize;
use serde::Serialize;

/// Immutable view of a session, built under the session lock and sent after it is released.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub game_id: String,
    pub board: [Stones; CELLS],
    pub current_player: Seat,
    pub game_over: bool,
    pub winner: i8,
    pub status: Status,
    pub player1_wants_rematch: bool,
    pub player2_wants_rematch: bool,
}

impl From<&Session> for Snapshot {
    fn from(session: &Session) -> Self {
        let game = session.game();
        Self {
            game_id: session.id().to_string(),
            board: *game.board().cells(),
            current_player: game.turn(),
            game_over: game.is_over(),
            winner: game.outcome().code(),
            status: session.status(),
            player1_wants_rematch: session.wants_rematch(Seat::First),
            player2_wants_rematch: session.wants_rematch(Seat::Second),
        }
    }
}

/// Snapshot plus the role the receiving participant was seated in.
/// Sent only to the participant who hosted or joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Details {
    #[serde(flatten)]
    pub snapshot: Snapshot,
    pub assigned_role: Seat,
}

impl Details {
    pub fn new(snapshot: Snapshot, assigned_role: Seat) -> Self {
        Self {
            snapshot,
            assigned_role,
        }
    }
}
