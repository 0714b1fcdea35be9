use crate::Pit;

/// Recoverable rejections of a player request.
/// Reported only to the requester; session state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Pit is out of range, not on the mover's side, or empty.
    InvalidMove { pit: Pit },
    /// Move submitted by the player who is not on turn.
    OutOfTurn,
    /// Move or rematch attempted in a status that does not allow it.
    NotInProgress,
    /// Unknown session id.
    NotFound,
    /// Both seats are already taken.
    Full,
    /// Participant is already seated (here or in another session).
    DuplicateJoin,
    /// Participant holds no seat in the session.
    NotAParticipant,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMove { pit } => write!(f, "invalid move: pit {} is not yours or is empty", pit),
            Self::OutOfTurn => write!(f, "out of turn: it is the other player's move"),
            Self::NotInProgress => write!(f, "game is not in progress"),
            Self::NotFound => write!(f, "game not found"),
            Self::Full => write!(f, "game is full"),
            Self::DuplicateJoin => write!(f, "already joined a game"),
            Self::NotAParticipant => write!(f, "not a participant of this game"),
        }
    }
}

impl std::error::Error for GameError {}
