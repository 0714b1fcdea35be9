//! Local Hot-Seat Binary
//!
//! Two people share one terminal, taking turns at the same prompt.

use mancala::players::*;

fn main() {
    mancala::log();
    Hotseat::new(Box::new(Human), Box::new(Human)).run();
}
