use super::Dispatcher;
use super::Notice;
use crate::ID;
use crate::gameroom::Participant;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Outbound JSON lines, one per connected participant.
/// Delivering only enqueues; each connection drains its own line.
#[derive(Default)]
pub struct Switchboard {
    lines: RwLock<HashMap<ID<Participant>, UnboundedSender<String>>>,
}

impl Switchboard {
    /// Opens a line for a newly connected participant.
    pub async fn connect(&self, participant: ID<Participant>) -> UnboundedReceiver<String> {
        let (tx, rx) = unbounded_channel::<String>();
        self.lines.write().await.insert(participant, tx);
        rx
    }
    pub async fn hangup(&self, participant: ID<Participant>) {
        self.lines.write().await.remove(&participant);
    }
    pub async fn len(&self) -> usize {
        self.lines.read().await.len()
    }
}

#[async_trait::async_trait]
impl Dispatcher for Switchboard {
    async fn deliver(&self, notice: Notice) {
        let json = notice.message().to_json();
        let lines = self.lines.read().await;
        for participant in notice.recipients() {
            lines
                .get(&participant)
                .map(|line| line.send(json.clone()))
                .and_then(|res| res.err())
                .inspect(|e| log::warn!("failed delivery to {}: {:?}", participant, e));
        }
    }
}
