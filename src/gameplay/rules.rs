use super::Board;
use super::Outcome;
use super::Ply;
use super::Seat;
use crate::GameError;
use crate::Pit;

/// Pure Kalah move function. No identity, no clock, no randomness:
/// the same (board, pit, seat) always yields the same [`Ply`].
pub struct Rules;

impl Rules {
    /// Sow from `pit` on behalf of `seat`.
    ///
    /// 1. lift every stone from the chosen pit
    /// 2. drop one per cell counter-clockwise, skipping the opponent's store
    /// 3. capture when the last stone lands alone on the mover's side
    /// 4. end the game once either side is cleared, banking both sides
    /// 5. otherwise grant an extra turn for a landing in the mover's own store
    pub fn play(board: Board, pit: Pit, seat: Seat) -> Result<Ply, GameError> {
        if !seat.owns(pit) || board.get(pit) == 0 {
            return Err(GameError::InvalidMove { pit });
        }
        let total = board.total();
        let mut board = board;
        let mut cell = pit;
        let mut stones = board.take(pit);
        while stones > 0 {
            cell = Board::next(cell, seat);
            board.deposit(cell, 1);
            stones -= 1;
        }
        let landing = cell;
        let captured = Self::capture(&mut board, landing, seat);
        assert_eq!(board.total(), total, "stones leaked while sowing");
        if Seat::ALL.iter().any(|&s| board.is_cleared(s)) {
            Seat::ALL.iter().for_each(|&s| board.sweep(s));
            assert_eq!(
                board.store(Seat::First) as usize + board.store(Seat::Second) as usize,
                total,
                "stones left in play after the final sweep"
            );
            return Ok(Ply {
                board,
                next: seat,
                over: true,
                outcome: Outcome::judge(&board),
                landing,
                captured,
            });
        }
        Ok(Ply {
            board,
            next: if landing == seat.store() { seat } else { seat.other() },
            over: false,
            outcome: Outcome::Pending,
            landing,
            captured,
        })
    }

    /// The landing stone is the only stone in its pit exactly when the pit
    /// was empty before, so landing + opposite equals opposite + 1.
    fn capture(board: &mut Board, landing: Pit, seat: Seat) -> crate::Stones {
        if !seat.owns(landing) || board.get(landing) != 1 {
            return 0;
        }
        let opposite = Board::opposite(landing);
        if board.get(opposite) == 0 {
            return 0;
        }
        let captured = board.take(opposite) + board.take(landing);
        board.deposit(seat.store(), captured);
        captured
    }
}
