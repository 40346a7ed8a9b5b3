//! CLI commands for playing games and managing history

pub mod history;
pub mod play;

use std::fmt;

use clap::ValueEnum;

use crate::types::GameKind;

/// Game selection shared by the play and history commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameChoice {
    Othello,
    Gomoku,
}

impl GameChoice {
    pub fn kind(self) -> GameKind {
        match self {
            GameChoice::Othello => GameKind::Othello,
            GameChoice::Gomoku => GameKind::Gomoku,
        }
    }
}

impl fmt::Display for GameChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}
