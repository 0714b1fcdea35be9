use super::LobbyConfig;
use super::Notice;
use crate::GameError;
use crate::ID;
use crate::Pit;
use crate::Unique;
use crate::dto::Details;
use crate::dto::ServerMessage;
use crate::dto::Snapshot;
use crate::gameplay::Seat;
use crate::gameroom::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tokio::sync::RwLock;

type Shared = Arc<Mutex<Session>>;

/// Registry of live sessions and of which participant sits where.
///
/// Locking discipline:
/// - each session has its own mutex; operations on different sessions never wait on each other
/// - the two maps are only ever locked briefly, sessions before seating when both are needed
/// - no map guard is held while waiting on a session mutex
/// - `seating` may be read while a session is held, never the other way round
/// - no I/O happens here; callers receive [`Notice`]s to hand to a dispatcher
pub struct Lobby {
    config: LobbyConfig,
    sessions: RwLock<HashMap<ID<Session>, Shared>>,
    seating: RwLock<HashMap<ID<Participant>, ID<Session>>>,
}

impl Default for Lobby {
    fn default() -> Self {
        Self::new(LobbyConfig::default())
    }
}

impl Lobby {
    pub fn new(config: LobbyConfig) -> Self {
        Self {
            config,
            sessions: RwLock::new(HashMap::new()),
            seating: RwLock::new(HashMap::new()),
        }
    }
    pub fn config(&self) -> &LobbyConfig {
        &self.config
    }
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
    pub async fn contains(&self, id: ID<Session>) -> bool {
        self.sessions.read().await.contains_key(&id)
    }
    pub async fn session_of(&self, participant: ID<Participant>) -> Option<ID<Session>> {
        self.seating.read().await.get(&participant).copied()
    }
    pub async fn snapshot(&self, id: ID<Session>) -> Result<Snapshot, GameError> {
        Ok(self.get(id).await?.lock().await.snapshot())
    }
}

impl Lobby {
    /// Opens an empty session waiting for its host.
    pub async fn create(&self) -> ID<Session> {
        let session = Session::new(Instant::now());
        let id = session.id();
        self.sessions
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(session)));
        log::info!("opened session {}", id);
        id
    }

    /// Opens a session and seats the caller as its host.
    pub async fn host(&self, participant: ID<Participant>) -> Result<Details, GameError> {
        if self.session_of(participant).await.is_some() {
            return Err(GameError::DuplicateJoin);
        }
        let id = self.create().await;
        match self.enter(id, participant).await {
            Ok((details, _)) => Ok(details),
            Err(e) => {
                self.remove(id, &[]).await;
                Err(e)
            }
        }
    }

    pub async fn join(
        &self,
        id: ID<Session>,
        participant: ID<Participant>,
    ) -> Result<Seat, GameError> {
        self.enter(id, participant)
            .await
            .map(|(details, _)| details.assigned_role)
    }

    /// Seats the participant and returns its seat assignment together with
    /// the state broadcast every participant should receive.
    pub async fn enter(
        &self,
        id: ID<Session>,
        participant: ID<Participant>,
    ) -> Result<(Details, Notice), GameError> {
        let shared = self.reserve(id, participant).await?;
        self.seat(id, participant, shared).await
    }

    pub async fn resolve(
        &self,
        id: ID<Session>,
        participant: ID<Participant>,
    ) -> Result<Seat, GameError> {
        self.get(id)
            .await?
            .lock()
            .await
            .seat_of(participant)
            .ok_or(GameError::NotAParticipant)
    }

    /// Sows for the participant's seat and broadcasts the resulting state.
    pub async fn play(
        &self,
        id: ID<Session>,
        participant: ID<Participant>,
        pit: Pit,
    ) -> Result<Notice, GameError> {
        let shared = self.get(id).await?;
        let (snapshot, recipients) = {
            let mut session = shared.lock().await;
            let seat = session
                .seat_of(participant)
                .ok_or(GameError::NotAParticipant)?;
            session.play(pit, seat)?;
            (session.snapshot(), session.participants())
        };
        Ok(Notice::broadcast(id, recipients, snapshot))
    }

    /// Records a rematch vote. Only the vote that completes the pair
    /// produces a broadcast.
    pub async fn rematch(
        &self,
        id: ID<Session>,
        participant: ID<Participant>,
    ) -> Result<Option<Notice>, GameError> {
        let shared = self.get(id).await?;
        let mut session = shared.lock().await;
        let seat = session
            .seat_of(participant)
            .ok_or(GameError::NotAParticipant)?;
        let reset = session.rematch(seat)?;
        let notice = reset.then(|| Notice::broadcast(id, session.participants(), session.snapshot()));
        drop(session);
        Ok(notice)
    }

    /// Drops the participant from whatever session it sits in.
    /// Idempotent: unknown or already-removed participants produce nothing.
    pub async fn disconnect(&self, participant: ID<Participant>) -> Vec<Notice> {
        let Some(id) = self.seating.write().await.remove(&participant) else {
            return Vec::new();
        };
        let Ok(shared) = self.get(id).await else {
            return Vec::new();
        };
        let (left, status, snapshot, remaining) = {
            let mut session = shared.lock().await;
            let left = session.leave(participant);
            (
                left,
                session.status(),
                session.snapshot(),
                session.participants(),
            )
        };
        if !left || status != Status::Cancelled {
            return Vec::new();
        }
        self.remove(id, &remaining).await;
        log::info!("closed session {} after {} disconnected", id, participant);
        std::iter::once(Notice::broadcast(id, remaining.clone(), snapshot))
            .chain(
                remaining
                    .into_iter()
                    .map(|p| Notice::direct(p, ServerMessage::opponent_left(id))),
            )
            .collect()
    }

    /// Evicts every session still waiting for a guest after the configured
    /// timeout. Each candidate is re-checked under its own lock, so a join
    /// that lands first keeps its session alive.
    pub async fn sweep(&self, now: Instant) -> Vec<Notice> {
        let candidates = self
            .sessions
            .read()
            .await
            .iter()
            .map(|(id, shared)| (*id, shared.clone()))
            .collect::<Vec<_>>();
        let mut notices = Vec::new();
        for (id, shared) in candidates {
            let evicted = {
                let mut session = shared.lock().await;
                session
                    .evict(now, self.config.stale)
                    .then(|| (session.snapshot(), session.participants()))
            };
            if let Some((snapshot, participants)) = evicted {
                self.remove(id, &participants).await;
                log::info!("swept stale session {}", id);
                notices.push(Notice::broadcast(id, participants, snapshot));
            }
        }
        notices
    }
}

impl Lobby {
    async fn get(&self, id: ID<Session>) -> Result<Shared, GameError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(GameError::NotFound)
    }
    /// Claims the participant's index entry for a session that exists right now.
    async fn reserve(
        &self,
        id: ID<Session>,
        participant: ID<Participant>,
    ) -> Result<Shared, GameError> {
        let sessions = self.sessions.read().await;
        let mut seating = self.seating.write().await;
        let shared = sessions.get(&id).cloned().ok_or(GameError::NotFound)?;
        match seating.get(&participant) {
            Some(_) => Err(GameError::DuplicateJoin),
            None => {
                seating.insert(participant, id);
                Ok(shared)
            }
        }
    }
    /// Second half of a join, once the index entry is claimed.
    /// The claim is re-checked under the session lock: a disconnect that
    /// slipped in between must not leave a seated participant unindexed.
    async fn seat(
        &self,
        id: ID<Session>,
        participant: ID<Participant>,
        shared: Shared,
    ) -> Result<(Details, Notice), GameError> {
        let joined = {
            let mut session = shared.lock().await;
            let claimed = self.seating.read().await.get(&participant) == Some(&id);
            match claimed {
                false => Err(GameError::NotFound),
                true => session
                    .join(participant)
                    .map(|seat| (seat, session.snapshot(), session.participants())),
            }
        };
        match joined {
            Ok((seat, snapshot, recipients)) => Ok((
                Details::new(snapshot.clone(), seat),
                Notice::broadcast(id, recipients, snapshot),
            )),
            Err(e) => {
                self.release(id, participant).await;
                log::warn!("{} could not join session {}: {}", participant, id, e);
                Err(e)
            }
        }
    }
    /// Undoes a reservation, unless the entry has since moved on.
    async fn release(&self, id: ID<Session>, participant: ID<Participant>) {
        let mut seating = self.seating.write().await;
        if seating.get(&participant) == Some(&id) {
            seating.remove(&participant);
        }
    }
    /// Removes a session together with its participants' index entries.
    async fn remove(&self, id: ID<Session>, participants: &[ID<Participant>]) {
        let mut sessions = self.sessions.write().await;
        let mut seating = self.seating.write().await;
        sessions.remove(&id);
        for participant in participants {
            if seating.get(participant) == Some(&id) {
                seating.remove(participant);
            }
        }
    }
}
