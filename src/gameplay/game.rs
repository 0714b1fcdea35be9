use super::Board;
use super::Outcome;
use super::Ply;
use super::Rules;
use super::Seat;
use crate::GameError;
use crate::Pit;

/// Running Kalah game: the board plus whose turn it is and how it ended.
///
/// This is the state the engine owns inside an online session, and it is
/// also playable on its own for hot-seat games. Its immutable methods are
/// pure functions of the state; [`Game::play`] is the in-place variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Seat,
    over: bool,
    outcome: Outcome,
}

impl Default for Game {
    fn default() -> Self {
        Self::root()
    }
}

impl From<(Board, Seat)> for Game {
    fn from((board, turn): (Board, Seat)) -> Self {
        Self {
            board,
            turn,
            over: false,
            outcome: Outcome::Pending,
        }
    }
}

impl Game {
    /// Four stones in every pit, empty stores, first player to move.
    pub fn root() -> Self {
        Self::from((Board::default(), Seat::First))
    }
    pub fn board(&self) -> Board {
        self.board
    }
    pub fn turn(&self) -> Seat {
        self.turn
    }
    pub fn is_over(&self) -> bool {
        self.over
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    /// Pits the player on turn may choose from.
    pub fn legal(&self) -> Vec<Pit> {
        match self.over {
            true => Vec::new(),
            false => self.board.playable(self.turn),
        }
    }

    pub fn apply(&self, pit: Pit) -> Result<Self, GameError> {
        let mut child = *self;
        child.play(pit).map(|_| child)
    }
    /// Sow for the player on turn. On error the game is untouched.
    pub fn play(&mut self, pit: Pit) -> Result<Ply, GameError> {
        if self.over {
            return Err(GameError::NotInProgress);
        }
        let ply = Rules::play(self.board, pit, self.turn)?;
        log::debug!("{} sowed pit {} -> landed {}", self.turn, pit, ply.landing);
        self.board = ply.board;
        self.turn = ply.next;
        self.over = ply.over;
        self.outcome = ply.outcome;
        if self.over {
            log::info!("game over, {}", self.outcome);
        }
        Ok(ply)
    }
    pub fn reset(&mut self) {
        *self = Self::root();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::STONES_TOTAL;
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn playout(seed: u64) -> Vec<Game> {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Game::root();
        let mut trail = vec![game];
        while !game.is_over() {
            let legal = game.legal();
            let pit = legal[rng.random_range(0..legal.len())];
            game.play(pit).expect("legal pit");
            trail.push(game);
        }
        trail
    }

    #[test]
    fn root_state() {
        let game = Game::root();
        assert_eq!(game.turn(), Seat::First);
        assert!(!game.is_over());
        assert_eq!(game.outcome(), Outcome::Pending);
        assert_eq!(game.legal(), vec![0, 1, 2, 3, 4, 5]);
    }
    #[test]
    fn apply_leaves_parent_untouched() {
        let root = Game::root();
        let child = root.apply(2).unwrap();
        assert_eq!(root, Game::root());
        assert_eq!(child.turn(), Seat::First);
        assert_eq!(child.board().store(Seat::First), 1);
    }
    #[test]
    fn invalid_move_changes_nothing() {
        let mut game = Game::root();
        assert_eq!(game.play(9), Err(GameError::InvalidMove { pit: 9 }));
        assert_eq!(game, Game::root());
    }
    #[test]
    fn finished_game_rejects_moves() {
        let mut cells = [0; crate::CELLS];
        cells[5] = 1;
        cells[6] = 30;
        cells[13] = 17;
        let mut game = Game::from((Board::from(cells), Seat::First));
        game.play(5).unwrap();
        assert!(game.is_over());
        assert_eq!(game.outcome(), Outcome::Winner(Seat::First));
        assert!(game.legal().is_empty());
        assert_eq!(game.play(0), Err(GameError::NotInProgress));
    }
    #[test]
    fn reset_restores_root() {
        let mut game = Game::root().apply(0).unwrap();
        game.reset();
        assert_eq!(game, Game::root());
    }
    #[test]
    fn random_playouts_conserve_stones() {
        for seed in 0..64 {
            let trail = playout(seed);
            for game in trail.iter() {
                assert_eq!(game.board().total(), STONES_TOTAL);
            }
            let last = trail.last().unwrap();
            assert!(last.is_over());
            assert_eq!(last.board().remaining(Seat::First), 0);
            assert_eq!(last.board().remaining(Seat::Second), 0);
            assert_eq!(
                last.board().store(Seat::First) as usize + last.board().store(Seat::Second) as usize,
                STONES_TOTAL
            );
            assert_eq!(last.outcome(), Outcome::judge(&last.board()));
        }
    }
}
