//! CSV export for game records.

use std::{fs::File, io::Write, path::Path};

use crate::{Result, error::Error, records::GameRecord};

/// Column headers for the record export, in write order.
const HEADERS: [&str; 7] = [
    "id",
    "date",
    "game",
    "winner",
    "black_count",
    "white_count",
    "moves",
];

/// Write `records` as CSV rows to an arbitrary writer.
///
/// # Errors
///
/// Returns [`Error::Csv`] if a row cannot be written, or [`Error::Io`]
/// if the final flush fails.
pub fn write_records_csv<W: Write>(writer: W, records: &[GameRecord]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADERS)?;

    for record in records {
        csv.write_record([
            record.id.as_str(),
            record.date.as_str(),
            &record.game.to_string(),
            record.winner.as_str(),
            &record.black_count.to_string(),
            &record.white_count.to_string(),
            &record.moves.to_string(),
        ])?;
    }

    csv.flush().map_err(|source| Error::Io {
        operation: "flush CSV output".to_string(),
        source,
    })?;
    Ok(())
}

/// Write `records` as a CSV file at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created, or the errors of
/// [`write_records_csv`].
pub fn export_records_csv(path: &Path, records: &[GameRecord]) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::Io {
        operation: format!("create export file {path:?}"),
        source,
    })?;
    write_records_csv(file, records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        identifiers::RecordId,
        types::{GameKind, GameOutcome, Player},
    };

    #[test]
    fn export_writes_header_and_one_row_per_record() {
        let mut record =
            GameRecord::new(GameKind::Othello, GameOutcome::Win(Player::Black), 40, 24, 60);
        record.id = RecordId::new("123");
        record.date = "2026-08-07 12:00:00".to_string();

        let mut out = Vec::new();
        write_records_csv(&mut out, &[record]).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("id,date,game,winner,black_count,white_count,moves")
        );
        assert_eq!(
            lines.next(),
            Some("123,2026-08-07 12:00:00,othello,black,40,24,60")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn export_of_no_records_is_just_the_header() {
        let mut out = Vec::new();
        write_records_csv(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }
}
