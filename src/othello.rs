//! Othello (Reversi) engine.
//!
//! The board is the fixed 8x8 grid; moves are legal when they bracket at
//! least one run of opponent stones between the placed stone and an existing
//! stone of the mover's color along any of the eight ray directions. A side
//! with no legal move is skipped; the game ends when neither side can move,
//! and the side with more stones wins.

pub mod board;
pub mod game;

pub use board::{BOARD_SIZE, Board};
pub use game::{Move, OthelloGame};
