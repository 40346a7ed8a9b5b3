//! Gomoku (five-in-a-row) engine.
//!
//! Stones are placed on an 11x11 grid and never move or flip; the first
//! side to line up five in a row along any axis wins, and a full board
//! without a winner is a draw.

pub mod board;
pub mod game;

pub use board::{BOARD_SIZE, Board, WIN_COUNT};
pub use game::{GomokuGame, Move};
