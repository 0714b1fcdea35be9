use crate::PITS_PER_SIDE;
use crate::Pit;
use std::ops::RangeInclusive;

/// One of the two sides of the board.
/// `First` owns pits 0..=5 and store 6, `Second` owns pits 7..=12 and store 13.
/// On the wire a seat is its role number, 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub const ALL: [Seat; 2] = [Seat::First, Seat::Second];

    pub fn index(&self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
    pub fn other(&self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
    /// Playing pits on this side of the board.
    pub fn pits(&self) -> RangeInclusive<Pit> {
        let start = self.index() * (PITS_PER_SIDE + 1);
        start..=start + PITS_PER_SIDE - 1
    }
    /// Scoring cell of this side.
    pub fn store(&self) -> Pit {
        self.index() * (PITS_PER_SIDE + 1) + PITS_PER_SIDE
    }
    pub fn owns(&self, pit: Pit) -> bool {
        self.pits().contains(&pit)
    }
}

impl TryFrom<usize> for Seat {
    type Error = &'static str;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::First),
            1 => Ok(Self::Second),
            _ => Err("seat must be 0 or 1"),
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

impl serde::Serialize for Seat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.index() as u8)
    }
}

impl<'de> serde::Deserialize<'de> for Seat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let n = <u8 as serde::Deserialize>::deserialize(deserializer)?;
        Seat::try_from(n as usize).map_err(serde::de::Error::custom)
    }
}
