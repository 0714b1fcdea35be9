pub mod board;
pub use board::*;

pub mod game;
pub use game::*;

pub mod outcome;
pub use outcome::*;

pub mod ply;
pub use ply::*;

pub mod rules;
pub use rules::*;

pub mod seat;
pub use seat::*;
