use super::Player;
use crate::Pit;
use crate::gameplay::Game;
use dialoguer::Select;
use std::fmt::Debug;
use std::fmt::Formatter;

/// Prompts on the terminal for one of the legal pits.
pub struct Human;

impl Player for Human {
    fn choose(&self, game: &Game) -> Pit {
        let legal = game.legal();
        let board = game.board();
        let choices = legal
            .iter()
            .map(|&pit| format!("pit {:>2} ({} stones)", pit, board.get(pit)))
            .collect::<Vec<String>>();
        let selection = Select::new()
            .with_prompt(format!("\n{} to move", game.turn()))
            .report(false)
            .items(choices.as_slice())
            .default(0)
            .interact()
            .expect("read selection from terminal");
        legal[selection]
    }
}

impl Debug for Human {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Human")
    }
}
