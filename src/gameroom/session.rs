use super::Participant;
use super::Status;
use crate::GameError;
use crate::ID;
use crate::Pit;
use crate::Unique;
use crate::dto::Snapshot;
use crate::gameplay::*;
use std::time::Duration;
use std::time::Instant;

/// One online match.
/// Imperative shell around a [`Game`] (functional core) that adds the two
/// participant identities, lifecycle status, and rematch votes.
///
/// A Session has no interior locking. The registry keeps each one behind
/// its own mutex so that every method here runs as a single atomic step.
#[derive(Debug, Clone)]
pub struct Session {
    id: ID<Self>,
    game: Game,
    status: Status,
    seats: [Option<ID<Participant>>; 2],
    votes: [bool; 2],
    created: Instant,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl Session {
    pub fn new(created: Instant) -> Self {
        Self {
            id: ID::default(),
            game: Game::root(),
            status: Status::WaitingForPlayer,
            seats: [None, None],
            votes: [false, false],
            created,
        }
    }
    pub fn game(&self) -> &Game {
        &self.game
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn wants_rematch(&self, seat: Seat) -> bool {
        self.votes[seat.index()]
    }
    pub fn seat_of(&self, participant: ID<Participant>) -> Option<Seat> {
        Seat::ALL
            .into_iter()
            .find(|s| self.seats[s.index()] == Some(participant))
    }
    pub fn participants(&self) -> Vec<ID<Participant>> {
        self.seats.iter().flatten().copied().collect()
    }
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }
}

impl Session {
    /// Seats the host first and the guest second.
    /// The session starts exactly when the second seat fills.
    pub fn join(&mut self, participant: ID<Participant>) -> Result<Seat, GameError> {
        if self.seat_of(participant).is_some() {
            return Err(GameError::DuplicateJoin);
        }
        if self.status == Status::Cancelled {
            return Err(GameError::NotFound);
        }
        let seat = Seat::ALL
            .into_iter()
            .find(|s| self.seats[s.index()].is_none())
            .ok_or(GameError::Full)?;
        self.seats[seat.index()] = Some(participant);
        if seat == Seat::Second {
            self.status = Status::InProgress;
        }
        log::info!("[session {}] {} joined as {}", self.id, participant, seat);
        Ok(seat)
    }

    /// Vacates the participant's seat and cancels the session.
    /// Returns false, changing nothing, if the participant holds no seat.
    pub fn leave(&mut self, participant: ID<Participant>) -> bool {
        match self.seat_of(participant) {
            None => false,
            Some(seat) => {
                self.seats[seat.index()] = None;
                self.status = Status::Cancelled;
                log::info!("[session {}] {} left, cancelled", self.id, seat);
                true
            }
        }
    }

    pub fn play(&mut self, pit: Pit, seat: Seat) -> Result<Ply, GameError> {
        if self.status != Status::InProgress {
            return Err(GameError::NotInProgress);
        }
        if seat != self.game.turn() {
            return Err(GameError::OutOfTurn);
        }
        let ply = self.game.play(pit)?;
        if ply.over {
            self.status = Status::Finished;
            log::info!("[session {}] finished, {}", self.id, ply.outcome);
        }
        Ok(ply)
    }

    /// Records a vote. Returns true when this vote completed the pair
    /// and the game was reset for a new match.
    pub fn rematch(&mut self, seat: Seat) -> Result<bool, GameError> {
        if self.status != Status::Finished {
            return Err(GameError::NotInProgress);
        }
        self.votes[seat.index()] = true;
        log::info!("[session {}] {} wants a rematch", self.id, seat);
        if self.votes.iter().all(|&v| v) {
            self.game.reset();
            self.votes = [false, false];
            self.status = Status::InProgress;
            log::info!("[session {}] rematch started", self.id);
            return Ok(true);
        }
        Ok(false)
    }

    /// Cancels the session if it is still waiting for a guest after `stale`.
    pub fn evict(&mut self, now: Instant, stale: Duration) -> bool {
        if self.status != Status::WaitingForPlayer {
            return false;
        }
        if now.saturating_duration_since(self.created) <= stale {
            return false;
        }
        self.status = Status::Cancelled;
        log::info!("[session {}] stale, evicted", self.id);
        true
    }
}

impl Unique for Session {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seated() -> (Session, ID<Participant>, ID<Participant>) {
        let mut session = Session::default();
        let host = ID::default();
        let guest = ID::default();
        session.join(host).unwrap();
        session.join(guest).unwrap();
        (session, host, guest)
    }
    fn finish(session: &mut Session) {
        let mut cells = [0; crate::CELLS];
        cells[5] = 1;
        cells[6] = 20;
        cells[13] = 27;
        session.game = Game::from((Board::from(cells), Seat::First));
        session.play(5, Seat::First).unwrap();
    }

    #[test]
    fn join_fills_seats_in_order() {
        let mut session = Session::default();
        assert_eq!(session.status(), Status::WaitingForPlayer);
        assert_eq!(session.join(ID::default()), Ok(Seat::First));
        assert_eq!(session.status(), Status::WaitingForPlayer);
        assert_eq!(session.join(ID::default()), Ok(Seat::Second));
        assert_eq!(session.status(), Status::InProgress);
        assert_eq!(session.join(ID::default()), Err(GameError::Full));
    }
    #[test]
    fn join_rejects_duplicates() {
        let mut session = Session::default();
        let host = ID::default();
        session.join(host).unwrap();
        assert_eq!(session.join(host), Err(GameError::DuplicateJoin));
        assert_eq!(session.status(), Status::WaitingForPlayer);
        assert_eq!(session.participants(), vec![host]);
    }
    #[test]
    fn leave_cancels_once() {
        let (mut session, host, guest) = seated();
        assert!(session.leave(guest));
        assert_eq!(session.status(), Status::Cancelled);
        assert_eq!(session.participants(), vec![host]);
        assert!(!session.leave(guest));
        assert!(!session.leave(ID::default()));
        assert_eq!(session.participants(), vec![host]);
    }
    #[test]
    fn cancelled_session_cannot_be_rejoined() {
        let (mut session, _, guest) = seated();
        session.leave(guest);
        assert_eq!(session.join(ID::default()), Err(GameError::NotFound));
    }
    #[test]
    fn moves_require_progress_and_turn() {
        let mut session = Session::default();
        session.join(ID::default()).unwrap();
        assert_eq!(session.play(0, Seat::First), Err(GameError::NotInProgress));
        let (mut session, _, _) = seated();
        let before = session.game().board();
        assert_eq!(session.play(7, Seat::Second), Err(GameError::OutOfTurn));
        assert_eq!(session.game().board(), before);
        assert_eq!(
            session.play(8, Seat::First),
            Err(GameError::InvalidMove { pit: 8 })
        );
        assert_eq!(session.game().board(), before);
        session.play(2, Seat::First).unwrap();
        assert_eq!(session.game().turn(), Seat::First);
    }
    #[test]
    fn game_over_finishes_session() {
        let (mut session, _, _) = seated();
        finish(&mut session);
        assert_eq!(session.status(), Status::Finished);
        assert_eq!(session.play(0, Seat::Second), Err(GameError::NotInProgress));
    }
    #[test]
    fn rematch_needs_both_votes() {
        let (mut session, _, _) = seated();
        assert_eq!(session.rematch(Seat::First), Err(GameError::NotInProgress));
        finish(&mut session);
        assert_eq!(session.rematch(Seat::First), Ok(false));
        assert!(session.wants_rematch(Seat::First));
        assert_eq!(session.rematch(Seat::First), Ok(false));
        assert_eq!(session.status(), Status::Finished);
        assert_eq!(session.rematch(Seat::Second), Ok(true));
        assert_eq!(session.status(), Status::InProgress);
        assert!(!session.wants_rematch(Seat::First));
        assert!(!session.wants_rematch(Seat::Second));
        assert_eq!(*session.game(), Game::root());
    }
    #[test]
    fn eviction_only_for_old_waiting_sessions() {
        let created = Instant::now();
        let stale = Duration::from_secs(600);
        let mut session = Session::new(created);
        session.join(ID::default()).unwrap();
        assert!(!session.evict(created + Duration::from_secs(599), stale));
        assert!(session.evict(created + Duration::from_secs(601), stale));
        assert_eq!(session.status(), Status::Cancelled);
        let (mut session, _, _) = seated();
        assert!(!session.evict(Instant::now() + Duration::from_secs(3600), stale));
    }
}
