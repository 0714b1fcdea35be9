//! Local play without a server.
//!
//! - [`Player`]: Picks a pit for whoever is on turn
//! - `Human`: Terminal prompt (feature `cli`)
//! - `Hotseat`: Two people sharing one terminal (feature `cli`)
#[cfg(feature = "cli")]
mod hotseat;
#[cfg(feature = "cli")]
mod human;

#[cfg(feature = "cli")]
pub use hotseat::*;
#[cfg(feature = "cli")]
pub use human::*;

use crate::Pit;
use crate::gameplay::Game;
use std::fmt::Debug;

pub trait Player: Debug {
    /// Must return one of `game.legal()`; only called while the game is live.
    fn choose(&self, game: &Game) -> Pit;
}
