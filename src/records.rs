//! Finished-game records and win statistics.
//!
//! A [`GameRecord`] is the immutable summary an engine produces exactly once
//! when a game reaches its terminal state. The record store owns every
//! record's lifetime from then on; the engines never read one back.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::{
    identifiers::RecordId,
    types::{GameKind, GameOutcome, Player},
};

/// Immutable summary of one finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: RecordId,
    /// Human-readable local time the game finished.
    pub date: String,
    pub game: GameKind,
    pub winner: GameOutcome,
    pub black_count: usize,
    pub white_count: usize,
    /// Total committed moves over the whole game.
    pub moves: usize,
}

impl GameRecord {
    /// Build a record stamped with the current local time. The id is the
    /// millisecond clock, which doubles as a creation-order sort key.
    pub fn new(
        game: GameKind,
        winner: GameOutcome,
        black_count: usize,
        white_count: usize,
        moves: usize,
    ) -> Self {
        let now = Local::now();
        GameRecord {
            id: RecordId::new(now.timestamp_millis().to_string()),
            date: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            game,
            winner,
            black_count,
            white_count,
            moves,
        }
    }
}

/// Win/draw tally over a list of records, for the history header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordStats {
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
}

impl RecordStats {
    /// Tally outcomes across `records`.
    pub fn tally(records: &[GameRecord]) -> Self {
        let mut stats = RecordStats::default();
        for record in records {
            match record.winner {
                GameOutcome::Win(Player::Black) => stats.black_wins += 1,
                GameOutcome::Win(Player::White) => stats.white_wins += 1,
                GameOutcome::Draw => stats.draws += 1,
            }
        }
        stats
    }

    pub fn total(&self) -> usize {
        self.black_wins + self.white_wins + self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(winner: GameOutcome) -> GameRecord {
        GameRecord::new(GameKind::Othello, winner, 34, 30, 60)
    }

    #[test]
    fn new_record_is_stamped() {
        let record = record(GameOutcome::Win(Player::Black));
        assert!(!record.id.as_str().is_empty());
        assert!(!record.date.is_empty());
        assert_eq!(record.moves, 60);
    }

    #[test]
    fn record_serializes_with_camel_case_fields() {
        let record = record(GameOutcome::Draw);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["winner"], "draw");
        assert_eq!(json["blackCount"], 34);
        assert_eq!(json["whiteCount"], 30);
        assert_eq!(json["game"], "othello");
    }

    #[test]
    fn stats_tally_counts_each_outcome() {
        let records = vec![
            record(GameOutcome::Win(Player::Black)),
            record(GameOutcome::Win(Player::Black)),
            record(GameOutcome::Win(Player::White)),
            record(GameOutcome::Draw),
        ];

        let stats = RecordStats::tally(&records);
        assert_eq!(stats.black_wins, 2);
        assert_eq!(stats.white_wins, 1);
        assert_eq!(stats.draws, 1);
        assert_eq!(stats.total(), 4);
    }
}
