//! Output formatting for the CLI

use crate::{
    gomoku::GomokuGame,
    othello::OthelloGame,
    records::{GameRecord, RecordStats},
    types::{Cell, Position},
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

fn stone(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Black => 'X',
        Cell::White => 'O',
    }
}

fn column_header(width: usize) -> String {
    let mut header = String::from("   ");
    for col in 0..width {
        header.push(char::from(b'a' + col as u8));
        header.push(' ');
    }
    header
}

/// Render the Othello board with `*` markers on the current side's legal
/// destinations and the score line underneath.
pub fn print_othello(game: &OthelloGame) {
    let legal = game.legal_moves();

    println!("{}", column_header(crate::othello::BOARD_SIZE));
    for row in 0..crate::othello::BOARD_SIZE {
        print!("{:>2} ", row + 1);
        for col in 0..crate::othello::BOARD_SIZE {
            let pos = Position::new(row, col);
            let cell = game.board().get(pos);
            let glyph = if cell == Cell::Empty && legal.contains(&pos) {
                '*'
            } else {
                stone(cell)
            };
            print!("{glyph} ");
        }
        println!();
    }

    let count = game.counts();
    println!("   Black (X) {} - {} White (O)", count.black, count.white);
}

/// Render the Gomoku board with the last-placed stone bracketed.
pub fn print_gomoku(game: &GomokuGame) {
    let last = game.last_move().map(|mv| mv.position);

    println!("{}", column_header(crate::gomoku::BOARD_SIZE));
    for row in 0..crate::gomoku::BOARD_SIZE {
        print!("{:>2} ", row + 1);
        for col in 0..crate::gomoku::BOARD_SIZE {
            let pos = Position::new(row, col);
            let glyph = stone(game.board().get(pos));
            // The '<' tag marks the most recent stone without breaking
            // the two-character cell grid.
            if last == Some(pos) {
                print!("{glyph}<");
            } else {
                print!("{glyph} ");
            }
        }
        println!();
    }
}

/// Print the win-statistics header for a history listing.
pub fn print_stats(stats: &RecordStats) {
    print_kv("Black wins", &stats.black_wins.to_string());
    print_kv("White wins", &stats.white_wins.to_string());
    print_kv("Draws", &stats.draws.to_string());
}

/// Print one history row.
pub fn print_record(record: &GameRecord) {
    println!(
        "  {}  {}  {:<10}  {} - {}  ({} moves)",
        record.id,
        record.date,
        record.winner.to_string(),
        record.black_count,
        record.white_count,
        record.moves
    );
}
