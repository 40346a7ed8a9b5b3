//! Shared game-domain types used by every engine.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A side in a two-player game. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get the opposing side
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Convert player to the cell holding one of their stones
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// A cell on a game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'B' | 'b' => Some(Cell::Black),
            'W' | 'w' => Some(Cell::White),
            _ => None,
        }
    }

    /// The player owning a stone in this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
            Cell::Empty => None,
        }
    }
}

/// A board coordinate, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    /// Algebraic form: column letter then 1-based row, e.g. `d3` for (2, 3).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = char::from(b'a' + (self.col % 26) as u8);
        write!(f, "{}{}", col, self.row + 1)
    }
}

/// Count of each piece type on a board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieceCount {
    pub black: usize,
    pub white: usize,
    pub empty: usize,
}

impl PieceCount {
    /// Total number of cells accounted for
    pub fn total(&self) -> usize {
        self.black + self.white + self.empty
    }
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// The winning side, or `None` for a draw
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            GameOutcome::Draw => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameOutcome::Win(Player::Black) => "black",
            GameOutcome::Win(Player::White) => "white",
            GameOutcome::Draw => "draw",
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(player) => write!(f, "{player} wins"),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}

// Records store outcomes as the plain strings "black" / "white" / "draw",
// matching the persisted history format.
impl Serialize for GameOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GameOutcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        match value.as_str() {
            "black" => Ok(GameOutcome::Win(Player::Black)),
            "white" => Ok(GameOutcome::Win(Player::White)),
            "draw" => Ok(GameOutcome::Draw),
            other => Err(serde::de::Error::unknown_variant(
                other,
                &["black", "white", "draw"],
            )),
        }
    }
}

/// The game a record or store belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Othello,
    Gomoku,
}

impl GameKind {
    /// Key under which this game's history is persisted
    pub fn storage_key(self) -> &'static str {
        match self {
            GameKind::Othello => "othello-history",
            GameKind::Gomoku => "gomoku-history",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameKind::Othello => write!(f, "othello"),
            GameKind::Gomoku => write!(f, "gomoku"),
        }
    }
}

impl FromStr for GameKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "othello" | "reversi" => Ok(GameKind::Othello),
            "gomoku" => Ok(GameKind::Gomoku),
            _ => Err(crate::Error::ParseGameKind {
                input: s.to_string(),
                expected: "othello, gomoku".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_swaps_sides() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
    }

    #[test]
    fn cell_char_roundtrip() {
        for cell in [Cell::Empty, Cell::Black, Cell::White] {
            assert_eq!(Cell::from_char(cell.to_char()), Some(cell));
        }
        assert_eq!(Cell::from_char('x'), None);
    }

    #[test]
    fn position_displays_algebraic() {
        assert_eq!(Position::new(2, 3).to_string(), "d3");
        assert_eq!(Position::new(0, 0).to_string(), "a1");
    }

    #[test]
    fn outcome_serializes_as_plain_string() {
        let json = serde_json::to_string(&GameOutcome::Win(Player::Black)).unwrap();
        assert_eq!(json, "\"black\"");
        let parsed: GameOutcome = serde_json::from_str("\"draw\"").unwrap();
        assert_eq!(parsed, GameOutcome::Draw);
    }

    #[test]
    fn game_kind_parses_aliases() {
        assert_eq!("reversi".parse::<GameKind>().unwrap(), GameKind::Othello);
        assert_eq!("Gomoku".parse::<GameKind>().unwrap(), GameKind::Gomoku);
        assert!("chess".parse::<GameKind>().is_err());
    }
}
