//! Play command - interactive games at the terminal
//!
//! Both sides are played at the same terminal, hot-seat style. The loop
//! renders the board, reads one action per line, and hands the result back
//! to the engine; every rejected input is reported and re-prompted, never
//! fatal.

use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use anyhow::Result;
use clap::Parser;

use super::GameChoice;
use crate::{
    adapters::JsonFileStore,
    cli::output,
    gomoku::GomokuGame,
    othello::OthelloGame,
    ports::RecordStore,
    records::GameRecord,
    types::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Play a game interactively")]
pub struct PlayArgs {
    /// Which game to play
    #[arg(value_enum)]
    pub game: GameChoice,

    /// Do not append the finished game to the history
    #[arg(long)]
    pub no_save: bool,
}

/// One line of player input, already classified.
enum Input {
    Move(usize, usize),
    Undo,
    Reset,
    Quit,
}

pub fn execute(args: PlayArgs, data_dir: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Moves are column letter + row number, e.g. d3. Commands: undo, new, quit.");

    let summary = match args.game {
        GameChoice::Othello => play_othello(&mut lines)?,
        GameChoice::Gomoku => play_gomoku(&mut lines)?,
    };

    if let Some(record) = summary {
        if args.no_save {
            return Ok(());
        }
        let store = JsonFileStore::for_game(data_dir, args.game.kind());
        let id = record.id.clone();
        store.append(record)?;
        println!("Saved to history as {id}.");
    }

    Ok(())
}

fn play_othello(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<GameRecord>> {
    let mut game = OthelloGame::new();

    loop {
        println!();
        output::print_othello(&game);

        if let Some(outcome) = game.outcome() {
            println!("\nGame over: {outcome}.");
            return Ok(game.summary());
        }

        let player = game.to_move();
        let Some(input) = prompt(lines, player, crate::othello::BOARD_SIZE)? else {
            return Ok(None);
        };

        match input {
            Input::Quit => return Ok(None),
            Input::Reset => game = OthelloGame::new(),
            Input::Undo => match game.undo() {
                Ok(next) => game = next,
                Err(err) => println!("{err}"),
            },
            Input::Move(row, col) => match game.play(row, col) {
                Ok(next) => {
                    // The engine already resolved any pass; announce it so
                    // the skipped side knows why they were not asked.
                    if !next.is_over() && next.to_move() == player {
                        println!("{} has no legal move and passes.", player.opponent());
                    }
                    game = next;
                }
                Err(err) => println!("{err}"),
            },
        }
    }
}

fn play_gomoku(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<GameRecord>> {
    let mut game = GomokuGame::new();

    loop {
        println!();
        output::print_gomoku(&game);

        if let Some(outcome) = game.outcome() {
            println!("\nGame over: {outcome}.");
            return Ok(game.summary());
        }

        let Some(input) = prompt(lines, game.to_move(), crate::gomoku::BOARD_SIZE)? else {
            return Ok(None);
        };

        match input {
            Input::Quit => return Ok(None),
            Input::Reset => game = GomokuGame::new(),
            Input::Undo => match game.undo() {
                Ok(next) => game = next,
                Err(err) => println!("{err}"),
            },
            Input::Move(row, col) => match game.play(row, col) {
                Ok(next) => game = next,
                Err(err) => println!("{err}"),
            },
        }
    }
}

/// Prompt until a recognizable line arrives. Returns `None` on end of
/// input, which ends the game the same way `quit` does.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    player: Player,
    board_size: usize,
) -> Result<Option<Input>> {
    loop {
        print!("{player}> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line?;

        match parse_input(line.trim(), board_size) {
            Some(input) => return Ok(Some(input)),
            None => println!("Unrecognized input. Try a coordinate like d3, undo, or quit."),
        }
    }
}

fn parse_input(line: &str, board_size: usize) -> Option<Input> {
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Some(Input::Quit),
        "u" | "undo" => return Some(Input::Undo),
        "n" | "new" | "reset" => return Some(Input::Reset),
        _ => {}
    }

    let mut chars = line.chars();
    let col_char = chars.next()?.to_ascii_lowercase();
    let col = (col_char as usize).checked_sub('a' as usize)?;
    let row: usize = chars.as_str().trim().parse().ok()?;

    // Rows are displayed 1-based.
    if col >= board_size || row == 0 || row > board_size {
        return None;
    }
    Some(Input::Move(row - 1, col))
}
