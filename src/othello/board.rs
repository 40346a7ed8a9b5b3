//! Othello board representation and move geometry

use std::fmt;

use crate::types::{Cell, PieceCount, Player, Position};

/// Board side length. Othello is always played on 8x8.
pub const BOARD_SIZE: usize = 8;
const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// The eight ray directions searched from a candidate cell:
/// four axis directions and four diagonals.
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// An 8x8 Othello board.
///
/// Cells only ever transition `Empty -> {Black, White}` on placement or
/// `Black <-> White` on capture; the one exception is undo, which reverses
/// a single placement and its captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; NUM_CELLS],
}

impl Board {
    /// Create the standard starting position: (3,3) and (4,4) White,
    /// (3,4) and (4,3) Black.
    pub fn new() -> Self {
        let mut board = Self::empty();
        let mid = BOARD_SIZE / 2;
        board.set(Position::new(mid - 1, mid - 1), Cell::White);
        board.set(Position::new(mid - 1, mid), Cell::Black);
        board.set(Position::new(mid, mid - 1), Cell::Black);
        board.set(Position::new(mid, mid), Cell::White);
        board
    }

    /// Create a board with no stones on it.
    pub fn empty() -> Self {
        Board {
            cells: [Cell::Empty; NUM_CELLS],
        }
    }

    /// Parse a board from its 64-character string form (whitespace ignored):
    /// `.` empty, `B`/`b` black, `W`/`w` white, row-major from the top-left.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoardLength`] if fewer than 64 cell
    /// characters are present, or [`crate::Error::InvalidCellCharacter`] for
    /// any character that is not a valid cell.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < NUM_CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: NUM_CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; NUM_CELLS];
        for (i, &c) in chars.iter().take(NUM_CELLS).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Encode the board as its 64-character string form.
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// Get the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[index(pos)]
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[index(pos)] = cell;
    }

    /// Whether a coordinate pair lies on the board.
    pub fn contains(row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    /// The stones `player` would capture by playing at `pos`.
    ///
    /// Walks each of the 8 ray directions collecting consecutive opponent
    /// stones; a run counts only if it terminates on one of the player's own
    /// stones (not off-board, not empty). The move is legal iff the returned
    /// list is non-empty, and move application flips exactly this list.
    pub fn flips_for(&self, pos: Position, player: Player) -> Vec<Position> {
        if self.get(pos) != Cell::Empty {
            return Vec::new();
        }

        let own = player.to_cell();
        let other = player.opponent().to_cell();
        let mut flips = Vec::new();

        for (dr, dc) in DIRECTIONS {
            let mut r = pos.row as i32 + dr;
            let mut c = pos.col as i32 + dc;
            let mut run = Vec::new();

            while in_bounds(r, c) {
                let here = Position::new(r as usize, c as usize);
                let cell = self.get(here);
                if cell == other {
                    run.push(here);
                } else {
                    // The run is captured only when it ends on one of the
                    // player's own stones; an empty cell discards it, and
                    // walking off the board falls through to the same fate.
                    if cell == own {
                        flips.append(&mut run);
                    }
                    break;
                }
                r += dr;
                c += dc;
            }
        }

        flips
    }

    /// Whether `pos` is a legal move for `player`.
    pub fn is_legal(&self, pos: Position, player: Player) -> bool {
        !self.flips_for(pos, player).is_empty()
    }

    /// All legal moves for `player`, in row-major order.
    pub fn legal_moves(&self, player: Player) -> Vec<Position> {
        let mut moves = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Position::new(row, col);
                if self.is_legal(pos, player) {
                    moves.push(pos);
                }
            }
        }
        moves
    }

    /// Whether `player` has at least one legal move.
    pub fn has_legal_move(&self, player: Player) -> bool {
        (0..BOARD_SIZE).any(|row| {
            (0..BOARD_SIZE).any(|col| self.is_legal(Position::new(row, col), player))
        })
    }

    /// Count stones of each color by linear scan.
    pub fn counts(&self) -> PieceCount {
        let mut count = PieceCount::default();
        for cell in &self.cells {
            match cell {
                Cell::Black => count.black += 1,
                Cell::White => count.white += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                write!(f, "{}", self.get(Position::new(row, col)).to_char())?;
            }
            if row < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

fn index(pos: Position) -> usize {
    debug_assert!(Board::contains(pos.row, pos.col));
    pos.row * BOARD_SIZE + pos.col
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_position_has_four_center_stones() {
        let board = Board::new();
        assert_eq!(board.get(Position::new(3, 3)), Cell::White);
        assert_eq!(board.get(Position::new(4, 4)), Cell::White);
        assert_eq!(board.get(Position::new(3, 4)), Cell::Black);
        assert_eq!(board.get(Position::new(4, 3)), Cell::Black);

        let count = board.counts();
        assert_eq!((count.black, count.white, count.empty), (2, 2, 60));
    }

    #[test]
    fn initial_black_legal_moves_are_the_four_standard_openings() {
        let board = Board::new();
        let expected = vec![
            Position::new(2, 3),
            Position::new(3, 2),
            Position::new(4, 5),
            Position::new(5, 4),
        ];
        assert_eq!(board.legal_moves(Player::Black), expected);
    }

    #[test]
    fn flips_for_collects_the_bracketed_run() {
        let board = Board::new();
        let flips = board.flips_for(Position::new(2, 3), Player::Black);
        assert_eq!(flips, vec![Position::new(3, 3)]);
    }

    #[test]
    fn occupied_cell_yields_no_flips() {
        let board = Board::new();
        assert!(board.flips_for(Position::new(3, 3), Player::Black).is_empty());
        assert!(!board.is_legal(Position::new(3, 3), Player::Black));
    }

    #[test]
    fn unbracketed_run_yields_no_flips() {
        // A white run that ends on an empty cell must not count.
        let board = Board::from_string(concat!(
            ".WW.....",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ))
        .unwrap();
        assert!(board.flips_for(Position::new(0, 3), Player::Black).is_empty());
    }

    #[test]
    fn run_to_the_board_edge_yields_no_flips() {
        // White stones run into the wall with no bracketing black stone.
        let board = Board::from_string(concat!(
            "......WW",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ))
        .unwrap();
        assert!(board.flips_for(Position::new(0, 5), Player::Black).is_empty());
    }

    #[test]
    fn flips_accumulate_across_directions() {
        // Black at (2,2) brackets white runs both rightward and downward.
        let board = Board::from_string(concat!(
            "........",
            "........",
            "...WB...",
            "..W.....",
            "..B.....",
            "........",
            "........",
            "........",
        ))
        .unwrap();
        let mut flips = board.flips_for(Position::new(2, 2), Player::Black);
        flips.sort();
        assert_eq!(flips, vec![Position::new(2, 3), Position::new(3, 2)]);
    }

    #[test]
    fn from_string_rejects_short_and_invalid_input() {
        assert!(matches!(
            Board::from_string("BW"),
            Err(crate::Error::InvalidBoardLength { .. })
        ));

        let bad = "X".repeat(64);
        assert!(matches!(
            Board::from_string(&bad),
            Err(crate::Error::InvalidCellCharacter { .. })
        ));
    }

    #[test]
    fn encode_roundtrips_through_from_string() {
        let board = Board::new();
        let encoded = board.encode();
        assert_eq!(encoded.len(), 64);
        assert_eq!(Board::from_string(&encoded).unwrap(), board);
    }

    #[test]
    fn counts_always_cover_the_whole_board() {
        let board = Board::new();
        assert_eq!(board.counts().total(), 64);
    }
}
