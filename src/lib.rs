//! Parlor game engines with persistent match history
//!
//! This crate provides:
//! - An Othello (Reversi) engine: legal-move computation by directional
//!   ray-casting, capture application, pass and terminal resolution, undo
//! - A Gomoku (five-in-a-row) engine with run-counting win detection
//! - An append-only store of finished-game records behind a port/adapter
//!   boundary, with JSON-file and in-memory implementations
//! - A terminal front-end for hot-seat play and history management
//!
//! Game states are value objects: `play` and `undo` take `&self` and return
//! the successor state, so a front-end owns exactly one mutable binding and
//! the engines stay deterministic and trivially testable.

pub mod adapters;
pub mod cli;
pub mod error;
pub mod export;
pub mod gomoku;
pub mod identifiers;
pub mod othello;
pub mod ports;
pub mod records;
pub mod types;

pub use error::{Error, Result};
pub use gomoku::GomokuGame;
pub use othello::OthelloGame;
pub use records::{GameRecord, RecordStats};
pub use types::{Cell, GameKind, GameOutcome, PieceCount, Player, Position};
