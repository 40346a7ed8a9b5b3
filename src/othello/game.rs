//! Othello game state and turn resolution

use tracing::{debug, instrument};

use super::board::Board;
use crate::{
    records::GameRecord,
    types::{Cell, GameKind, GameOutcome, PieceCount, Player, Position},
};

/// A committed move: where it was played, by whom, and every stone it
/// captured. The flip list is what undo reverses and what a front-end can
/// use to stage capture animation without re-deriving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub position: Position,
    pub player: Player,
    pub flipped: Vec<Position>,
}

/// A complete Othello game: board, side to move, move history, pass
/// bookkeeping, and the outcome once the game has ended.
///
/// The state is a value object. [`play`] and [`undo`] borrow the current
/// state and return the successor; the caller owns the single mutable
/// binding and decides when to replace it.
///
/// [`play`]: OthelloGame::play
/// [`undo`]: OthelloGame::undo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OthelloGame {
    board: Board,
    to_move: Player,
    outcome: Option<GameOutcome>,
    moves: Vec<Move>,
    pass_streak: u32,
}

impl OthelloGame {
    /// Start a new game from the standard position, Black to move.
    pub fn new() -> Self {
        OthelloGame {
            board: Board::new(),
            to_move: Player::Black,
            outcome: None,
            moves: Vec::new(),
            pass_streak: 0,
        }
    }

    /// Build a game from an arbitrary position.
    ///
    /// Pass and terminal resolution run immediately: if `to_move` has no
    /// legal move the turn passes (or the game ends when neither side can
    /// move), exactly as it would after a played move. The position itself
    /// is taken as given; no reachability check is attempted.
    pub fn with_board(board: Board, to_move: Player) -> Self {
        let mut game = OthelloGame {
            board,
            to_move,
            outcome: None,
            moves: Vec::new(),
            pass_streak: 0,
        };
        game.resolve_turn();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side whose turn it is. Meaningless once the game is over.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The result, present only when the game has ended.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Committed moves, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The most recent committed move, if any.
    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// How many times in a row a side had to be skipped for lack of a legal
    /// move. Resets to zero whenever a move is played or undone.
    pub fn pass_streak(&self) -> u32 {
        self.pass_streak
    }

    /// Stone counts for live score display and terminal resolution.
    pub fn counts(&self) -> PieceCount {
        self.board.counts()
    }

    /// Legal destinations for the side to move, row-major. Empty once the
    /// game is over.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.legal_moves(self.to_move)
    }

    /// Play a stone for the side to move and return the successor state.
    ///
    /// Applies the placement and every capture it brackets, then resolves
    /// the turn: the opponent moves next unless they have no legal move, in
    /// which case the turn stays with the mover (a pass) or, if the mover is
    /// also stuck, the game ends and the outcome is recorded.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::GameOver`] if the game has already ended
    /// - [`crate::Error::OutOfBounds`] if the coordinate is off the board
    /// - [`crate::Error::InvalidMove`] if the cell is occupied or the move
    ///   captures nothing; the current state is unchanged
    #[must_use = "play returns the successor state; the original is unchanged"]
    #[instrument(level = "debug", skip(self))]
    pub fn play(&self, row: usize, col: usize) -> Result<OthelloGame, crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }
        if !Board::contains(row, col) {
            return Err(crate::Error::OutOfBounds { row, col });
        }

        let pos = Position::new(row, col);
        let player = self.to_move;
        let flipped = self.board.flips_for(pos, player);
        if flipped.is_empty() {
            return Err(crate::Error::InvalidMove { row, col });
        }

        let mut next = self.clone();
        next.board.set(pos, player.to_cell());
        for &flip in &flipped {
            next.board.set(flip, player.to_cell());
        }
        next.moves.push(Move {
            position: pos,
            player,
            flipped,
        });
        next.pass_streak = 0;
        next.to_move = player.opponent();
        next.resolve_turn();
        Ok(next)
    }

    /// Take back the most recent move and return the successor state.
    ///
    /// The placement cell becomes empty again, every captured stone returns
    /// to the opponent of the move's player, and that player is back on
    /// move. The pass streak resets to zero; pass history before the undone
    /// move is not reconstructed.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::GameOver`] once the game has ended; a finished
    ///   game cannot be taken back
    /// - [`crate::Error::NoHistory`] if no move has been played
    #[must_use = "undo returns the successor state; the original is unchanged"]
    #[instrument(level = "debug", skip(self))]
    pub fn undo(&self) -> Result<OthelloGame, crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }

        let mut next = self.clone();
        let Some(mv) = next.moves.pop() else {
            return Err(crate::Error::NoHistory);
        };
        next.board.set(mv.position, Cell::Empty);
        let restored = mv.player.opponent().to_cell();
        for &flip in &mv.flipped {
            next.board.set(flip, restored);
        }
        next.to_move = mv.player;
        next.pass_streak = 0;
        Ok(next)
    }

    /// Summary record of a finished game, or `None` while play continues.
    pub fn summary(&self) -> Option<GameRecord> {
        let outcome = self.outcome?;
        let count = self.counts();
        Some(GameRecord::new(
            GameKind::Othello,
            outcome,
            count.black,
            count.white,
            self.moves.len(),
        ))
    }

    /// Hand the turn to whichever side can actually move.
    ///
    /// Terminal rule: the game ends exactly when neither side has a legal
    /// move. The pass streak is bookkeeping for the front-end, never the
    /// termination condition.
    fn resolve_turn(&mut self) {
        loop {
            if self.board.has_legal_move(self.to_move) {
                return;
            }
            if !self.board.has_legal_move(self.to_move.opponent()) {
                let count = self.board.counts();
                let outcome = if count.black > count.white {
                    GameOutcome::Win(Player::Black)
                } else if count.white > count.black {
                    GameOutcome::Win(Player::White)
                } else {
                    GameOutcome::Draw
                };
                debug!(?outcome, "game over");
                self.outcome = Some(outcome);
                return;
            }
            debug!(skipped = %self.to_move, "pass");
            self.pass_streak += 1;
            self.to_move = self.to_move.opponent();
        }
    }
}

impl Default for OthelloGame {
    fn default() -> Self {
        Self::new()
    }
}
