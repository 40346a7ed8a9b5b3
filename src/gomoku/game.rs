//! Gomoku game state

use tracing::{debug, instrument};

use super::board::Board;
use crate::{
    records::GameRecord,
    types::{Cell, GameKind, GameOutcome, PieceCount, Player, Position},
};

/// A committed Gomoku move. Placements never capture, so position and
/// player are the whole story.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub position: Position,
    pub player: Player,
}

/// A complete Gomoku game. Same value-object discipline as
/// [`OthelloGame`](crate::othello::OthelloGame): `play` and `undo` return
/// successor states and leave the original untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GomokuGame {
    board: Board,
    to_move: Player,
    outcome: Option<GameOutcome>,
    moves: Vec<Move>,
}

impl GomokuGame {
    /// Start a new game on an empty board, Black to move.
    pub fn new() -> Self {
        GomokuGame {
            board: Board::new(),
            to_move: Player::Black,
            outcome: None,
            moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn counts(&self) -> PieceCount {
        self.board.counts()
    }

    /// Place a stone for the side to move and return the successor state.
    ///
    /// A stone completing five in a row wins immediately; filling the last
    /// cell without a winner is a draw.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::GameOver`] if the game has already ended
    /// - [`crate::Error::OutOfBounds`] if the coordinate is off the board
    /// - [`crate::Error::InvalidMove`] if the cell is occupied
    #[must_use = "play returns the successor state; the original is unchanged"]
    #[instrument(level = "debug", skip(self))]
    pub fn play(&self, row: usize, col: usize) -> Result<GomokuGame, crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }
        if !Board::contains(row, col) {
            return Err(crate::Error::OutOfBounds { row, col });
        }

        let pos = Position::new(row, col);
        if self.board.get(pos) != Cell::Empty {
            return Err(crate::Error::InvalidMove { row, col });
        }

        let player = self.to_move;
        let mut next = self.clone();
        next.board.set(pos, player.to_cell());
        next.moves.push(Move {
            position: pos,
            player,
        });

        if next.board.wins_at(pos, player) {
            debug!(winner = %player, "five in a row");
            next.outcome = Some(GameOutcome::Win(player));
        } else if next.board.is_full() {
            debug!("board full");
            next.outcome = Some(GameOutcome::Draw);
        } else {
            next.to_move = player.opponent();
        }

        Ok(next)
    }

    /// Take back the most recent stone and return the successor state.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::GameOver`] once the game has ended
    /// - [`crate::Error::NoHistory`] if no stone has been placed
    #[must_use = "undo returns the successor state; the original is unchanged"]
    #[instrument(level = "debug", skip(self))]
    pub fn undo(&self) -> Result<GomokuGame, crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }

        let mut next = self.clone();
        let Some(mv) = next.moves.pop() else {
            return Err(crate::Error::NoHistory);
        };
        next.board.set(mv.position, Cell::Empty);
        next.to_move = mv.player;
        Ok(next)
    }

    /// Summary record of a finished game, or `None` while play continues.
    pub fn summary(&self) -> Option<GameRecord> {
        let outcome = self.outcome?;
        let count = self.counts();
        Some(GameRecord::new(
            GameKind::Gomoku,
            outcome,
            count.black,
            count.white,
            self.moves.len(),
        ))
    }
}

impl Default for GomokuGame {
    fn default() -> Self {
        Self::new()
    }
}
