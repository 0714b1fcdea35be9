use super::Dispatcher;
use super::Lobby;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Background task that periodically evicts stale sessions.
/// Runs independently of request handling; eviction itself still goes
/// through each session's lock inside [`Lobby::sweep`].
pub struct Sweeper;

impl Sweeper {
    pub fn spawn(lobby: Arc<Lobby>, dispatcher: Arc<dyn Dispatcher>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let period = lobby.config().sweep;
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            log::info!("sweeping stale sessions every {:?}", period);
            loop {
                ticker.tick().await;
                for notice in lobby.sweep(Instant::now()).await {
                    dispatcher.deliver(notice).await;
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ID;
    use crate::hosting::LobbyConfig;
    use crate::hosting::Notice;
    use std::time::Duration;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<Notice>>);

    #[async_trait::async_trait]
    impl Dispatcher for Recorder {
        async fn deliver(&self, notice: Notice) {
            self.0.lock().await.push(notice);
        }
    }

    #[tokio::test]
    async fn evicts_in_the_background() {
        let lobby = Arc::new(Lobby::new(LobbyConfig::new(
            Duration::ZERO,
            Duration::from_millis(10),
        )));
        let recorder = Arc::new(Recorder::default());
        let host = ID::default();
        lobby.host(host).await.unwrap();
        let handle = Sweeper::spawn(lobby.clone(), recorder.clone());
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.abort();
        assert!(lobby.is_empty().await);
        assert_eq!(lobby.session_of(host).await, None);
        let notices = recorder.0.lock().await;
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].recipients(), vec![host]);
    }
}
