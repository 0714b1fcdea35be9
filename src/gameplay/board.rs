use super::Seat;
use crate::CELLS;
use crate::PITS_PER_SIDE;
use crate::Pit;
use crate::STONES_PER_PIT;
use crate::Stones;

/// Fixed ring of 14 cells.
/// Indices 0..=5 and 7..=12 are playing pits, 6 and 13 are the stores.
/// Stone counts are unsigned, so the non-negativity half of the
/// conservation invariant holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board([Stones; CELLS]);

impl Default for Board {
    fn default() -> Self {
        let mut cells = [STONES_PER_PIT; CELLS];
        cells[Seat::First.store()] = 0;
        cells[Seat::Second.store()] = 0;
        Self(cells)
    }
}

impl From<[Stones; CELLS]> for Board {
    fn from(cells: [Stones; CELLS]) -> Self {
        Self(cells)
    }
}

impl From<Board> for [Stones; CELLS] {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl Board {
    pub fn cells(&self) -> &[Stones; CELLS] {
        &self.0
    }
    pub fn get(&self, pit: Pit) -> Stones {
        self.0[pit]
    }
    pub fn store(&self, seat: Seat) -> Stones {
        self.0[seat.store()]
    }
    /// Stones on the whole board; constant over a game.
    pub fn total(&self) -> usize {
        self.0.iter().map(|&s| s as usize).sum()
    }
    /// Stones still in play on one side, store excluded.
    pub fn remaining(&self, seat: Seat) -> usize {
        seat.pits().map(|p| self.0[p] as usize).sum()
    }
    pub fn is_cleared(&self, seat: Seat) -> bool {
        self.remaining(seat) == 0
    }
    /// Pits the given side may sow from.
    pub fn playable(&self, seat: Seat) -> Vec<Pit> {
        seat.pits().filter(|&p| self.0[p] > 0).collect()
    }

    /// Cell directly across the board from a playing pit.
    pub fn opposite(pit: Pit) -> Pit {
        2 * PITS_PER_SIDE - pit
    }
    /// Next cell counter-clockwise for a sower, skipping the opponent's store.
    pub fn next(pit: Pit, sower: Seat) -> Pit {
        match (pit + 1) % CELLS {
            p if p == sower.other().store() => (p + 1) % CELLS,
            p => p,
        }
    }

    pub(crate) fn take(&mut self, pit: Pit) -> Stones {
        std::mem::take(&mut self.0[pit])
    }
    pub(crate) fn deposit(&mut self, pit: Pit, stones: Stones) {
        self.0[pit] += stones;
    }
    /// Moves every stone left on a side into that side's store.
    pub(crate) fn sweep(&mut self, seat: Seat) {
        let swept = seat.pits().map(|p| self.take(p)).sum::<Stones>();
        self.deposit(seat.store(), swept);
    }
}

impl std::fmt::Display for Board {
    /// Second player's row on top (right to left), first player's row below.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let north = Seat::Second
            .pits()
            .rev()
            .map(|p| format!("{:>2}", self.0[p]))
            .collect::<Vec<_>>()
            .join(" ");
        let south = Seat::First
            .pits()
            .map(|p| format!("{:>2}", self.0[p]))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(f, "     {}", north)?;
        writeln!(
            f,
            "{:>2} {:>w$} {:>2}",
            self.store(Seat::Second),
            "",
            self.store(Seat::First),
            w = north.len() + 2
        )?;
        write!(f, "     {}", south)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn starting_layout() {
        let board = Board::default();
        assert_eq!(board.total(), 48);
        assert_eq!(board.store(Seat::First), 0);
        assert_eq!(board.store(Seat::Second), 0);
        assert_eq!(board.remaining(Seat::First), 24);
        assert_eq!(board.playable(Seat::Second), vec![7, 8, 9, 10, 11, 12]);
    }
    #[test]
    fn opposite_pits() {
        assert_eq!(Board::opposite(0), 12);
        assert_eq!(Board::opposite(5), 7);
        assert_eq!(Board::opposite(11), 1);
    }
    #[test]
    fn next_skips_opponent_store() {
        assert_eq!(Board::next(5, Seat::First), 6);
        assert_eq!(Board::next(12, Seat::First), 0);
        assert_eq!(Board::next(12, Seat::Second), 13);
        assert_eq!(Board::next(13, Seat::Second), 0);
        assert_eq!(Board::next(5, Seat::Second), 7);
    }
    #[test]
    fn sweep_banks_remaining_stones() {
        let mut board = Board::default();
        board.sweep(Seat::Second);
        assert_eq!(board.store(Seat::Second), 24);
        assert!(board.is_cleared(Seat::Second));
        assert_eq!(board.total(), 48);
    }
}
