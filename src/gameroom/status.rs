use serde::Deserialize;
use serde::Serialize;

/// Lifecycle of an online session.
///
/// WaitingForPlayer -> InProgress -> Finished -> (rematch) InProgress.
/// A participant leaving moves any status to Cancelled, which is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    WaitingForPlayer,
    InProgress,
    Finished,
    Cancelled,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WaitingForPlayer => write!(f, "WAITING_FOR_PLAYER"),
            Self::InProgress => write!(f, "IN_PROGRESS"),
            Self::Finished => write!(f, "FINISHED"),
            Self::Cancelled => write!(f, "CANCELLED"),
        }
    }
}
