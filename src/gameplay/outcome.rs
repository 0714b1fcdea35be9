use super::Board;
use super::Seat;

/// Result of a game as seen on the wire: -1 for draw or undecided, else the winning role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    Pending,
    Draw,
    Winner(Seat),
}

impl Outcome {
    /// Higher store wins; equal stores draw.
    pub fn judge(board: &Board) -> Self {
        let first = board.store(Seat::First);
        let second = board.store(Seat::Second);
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Self::Winner(Seat::First),
            std::cmp::Ordering::Less => Self::Winner(Seat::Second),
            std::cmp::Ordering::Equal => Self::Draw,
        }
    }
    /// Wire sentinel: -1, 0 or 1.
    pub fn code(&self) -> i8 {
        match self {
            Self::Winner(seat) => seat.index() as i8,
            Self::Draw | Self::Pending => -1,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "undecided"),
            Self::Draw => write!(f, "draw"),
            Self::Winner(seat) => write!(f, "{} wins", seat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn judge_by_store() {
        let mut cells = [0; crate::CELLS];
        cells[6] = 25;
        cells[13] = 23;
        assert_eq!(Outcome::judge(&Board::from(cells)), Outcome::Winner(Seat::First));
        cells[6] = 24;
        cells[13] = 24;
        assert_eq!(Outcome::judge(&Board::from(cells)), Outcome::Draw);
    }
    #[test]
    fn wire_codes() {
        assert_eq!(Outcome::Pending.code(), -1);
        assert_eq!(Outcome::Draw.code(), -1);
        assert_eq!(Outcome::Winner(Seat::Second).code(), 1);
    }
}
