use super::Player;
use crate::GameError;
use crate::gameplay::Game;
use crate::gameplay::Outcome;
use crate::gameplay::Ply;
use crate::gameplay::Seat;
use colored::Colorize;
use dialoguer::Confirm;

/// Two players taking turns at one terminal.
pub struct Hotseat {
    game: Game,
    players: [Box<dyn Player>; 2],
}

impl Hotseat {
    pub fn new(first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        Self {
            game: Game::root(),
            players: [first, second],
        }
    }
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Plays games until the players decline a rematch.
    pub fn run(&mut self) {
        loop {
            while !self.game.is_over() {
                println!("\n{}", self.game.board());
                if let Err(e) = self.turn() {
                    println!("{}", e.to_string().red());
                }
            }
            println!("\n{}", self.game.board());
            println!("{}", self.banner());
            match Confirm::new()
                .with_prompt("rematch?")
                .default(true)
                .interact()
                .unwrap_or(false)
            {
                true => self.game.reset(),
                false => break,
            }
        }
    }

    /// Asks whoever is on turn for a pit and sows it.
    pub fn turn(&mut self) -> Result<Ply, GameError> {
        let mover = self.game.turn();
        let pit = self.players[mover.index()].choose(&self.game);
        let ply = self.game.play(pit)?;
        if ply.captured > 0 {
            println!("{} captures {}", mover, ply.captured.to_string().yellow());
        }
        if ply.is_extra_turn(mover) {
            println!("{} goes again", mover);
        }
        Ok(ply)
    }

    fn banner(&self) -> String {
        let board = self.game.board();
        let score = format!(
            "{} - {}",
            board.store(Seat::First),
            board.store(Seat::Second)
        );
        match self.game.outcome() {
            Outcome::Winner(seat) => format!("{} wins {}", seat, score).green().bold().to_string(),
            Outcome::Draw => format!("draw {}", score).yellow().bold().to_string(),
            Outcome::Pending => score,
        }
    }
}
