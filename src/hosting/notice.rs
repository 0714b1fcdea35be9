use crate::ID;
use crate::dto::ServerMessage;
use crate::gameroom::Participant;
use crate::gameroom::Session;

/// Outbound message produced by the registry, computed under a session
/// lock and handed to a [`Dispatcher`] only after that lock is released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Delivered to every participant of a session.
    Broadcast {
        session: ID<Session>,
        recipients: Vec<ID<Participant>>,
        message: ServerMessage,
    },
    /// Delivered to a single participant.
    Direct {
        participant: ID<Participant>,
        message: ServerMessage,
    },
}

impl Notice {
    pub fn broadcast<M>(session: ID<Session>, recipients: Vec<ID<Participant>>, message: M) -> Self
    where
        M: Into<ServerMessage>,
    {
        Self::Broadcast {
            session,
            recipients,
            message: message.into(),
        }
    }
    pub fn direct<M>(participant: ID<Participant>, message: M) -> Self
    where
        M: Into<ServerMessage>,
    {
        Self::Direct {
            participant,
            message: message.into(),
        }
    }
    pub fn message(&self) -> &ServerMessage {
        match self {
            Self::Broadcast { message, .. } | Self::Direct { message, .. } => message,
        }
    }
    /// Everyone this notice should reach.
    pub fn recipients(&self) -> Vec<ID<Participant>> {
        match self {
            Self::Broadcast { recipients, .. } => recipients.clone(),
            Self::Direct { participant, .. } => vec![*participant],
        }
    }
}

/// Transport side of the registry.
/// Sole producer of outbound traffic; the registry never does I/O itself.
#[async_trait::async_trait]
pub trait Dispatcher: Send + Sync {
    async fn deliver(&self, notice: Notice);
}
