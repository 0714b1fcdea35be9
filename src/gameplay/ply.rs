use super::Board;
use super::Outcome;
use super::Seat;
use crate::Pit;
use crate::Stones;

/// Everything a single sowing produced.
/// `next` is the mover again on an extra turn, and stays the mover once the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ply {
    pub board: Board,
    pub next: Seat,
    pub over: bool,
    pub outcome: Outcome,
    pub landing: Pit,
    pub captured: Stones,
}

impl Ply {
    pub fn is_extra_turn(&self, mover: Seat) -> bool {
        !self.over && self.next == mover
    }
}
