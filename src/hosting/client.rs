use super::Dispatcher;
use super::Lobby;
use super::Notice;
use crate::GameError;
use crate::ID;
use crate::dto::ClientMessage;
use crate::dto::ServerMessage;
use crate::gameroom::Participant;
use crate::gameroom::Session;
use std::sync::Arc;

/// One connected participant.
/// Decodes its requests, routes them to the [`Lobby`], and hands every
/// resulting notice to the dispatcher once the lobby call has returned.
/// Rejections go back to this participant only.
pub struct Client {
    id: ID<Participant>,
    lobby: Arc<Lobby>,
    dispatcher: Arc<dyn Dispatcher>,
}

impl Client {
    pub fn new(id: ID<Participant>, lobby: Arc<Lobby>, dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self {
            id,
            lobby,
            dispatcher,
        }
    }
    pub fn id(&self) -> ID<Participant> {
        self.id
    }

    pub async fn handle(&self, text: &str) {
        let notices = match ClientMessage::try_from(text) {
            Err(e) => {
                log::warn!("undecodable message from {}: {}", self.id, e);
                vec![Notice::direct(self.id, ServerMessage::error(e))]
            }
            Ok(message) => self.route(message).await.unwrap_or_else(|e| {
                log::warn!("rejected request from {}: {}", self.id, e);
                vec![Notice::direct(self.id, ServerMessage::error(e))]
            }),
        };
        self.dispatch(notices).await;
    }

    /// Connection closed: drop out of any session and notify whoever is left.
    pub async fn close(&self) {
        let notices = self.lobby.disconnect(self.id).await;
        self.dispatch(notices).await;
    }

    async fn route(&self, message: ClientMessage) -> Result<Vec<Notice>, GameError> {
        match message {
            ClientMessage::Host => {
                let details = self.lobby.host(self.id).await?;
                Ok(vec![Notice::direct(self.id, details)])
            }
            ClientMessage::Join { game_id } => {
                let (details, notice) = self.lobby.enter(Self::parse(&game_id)?, self.id).await?;
                Ok(vec![Notice::direct(self.id, details), notice])
            }
            ClientMessage::Move { game_id, pit_index } => self
                .lobby
                .play(Self::parse(&game_id)?, self.id, pit_index)
                .await
                .map(|notice| vec![notice]),
            ClientMessage::Rematch { game_id } => self
                .lobby
                .rematch(Self::parse(&game_id)?, self.id)
                .await
                .map(|notice| notice.into_iter().collect()),
        }
    }

    async fn dispatch(&self, notices: Vec<Notice>) {
        for notice in notices {
            self.dispatcher.deliver(notice).await;
        }
    }

    fn parse(game_id: &str) -> Result<ID<Session>, GameError> {
        ID::try_from(game_id).map_err(|_| GameError::NotFound)
    }
}
