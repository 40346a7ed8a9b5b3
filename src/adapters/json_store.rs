//! JSON-file implementation of the record store.
//!
//! This adapter implements the [`RecordStore`] port with one pretty-printed
//! JSON file per store, the disk-side analog of the original browser
//! history kept under a per-game local-storage key.

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use tracing::instrument;

use crate::{
    Result, error::Error, identifiers::RecordId, ports::RecordStore, records::GameRecord,
    types::GameKind,
};

/// JSON-file-backed record store.
///
/// Records live newest-first in a single JSON array. Every operation reads
/// the whole file and rewrites it; the lists involved are short (a personal
/// game history), so simplicity wins over incremental IO. A missing file
/// reads as an empty history.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// use parlor::adapters::JsonFileStore;
/// use parlor::ports::RecordStore;
/// use parlor::types::GameKind;
///
/// let store = JsonFileStore::for_game(Path::new("parlor-data"), GameKind::Othello);
/// for record in store.records()? {
///     println!("{}: {}", record.date, record.winner);
/// }
/// # Ok::<(), parlor::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// Create the store for a game's history inside `data_dir`, named after
    /// the game's storage key (e.g. `othello-history.json`).
    pub fn for_game(data_dir: &Path, game: GameKind) -> Self {
        Self::new(data_dir.join(format!("{}.json", game.storage_key())))
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<GameRecord>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(Error::Io {
                    operation: format!("open records file {:?}", self.path),
                    source,
                });
            }
        };

        let records = serde_json::from_reader(BufReader::new(file))?;
        Ok(records)
    }

    fn write_all(&self, records: &[GameRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                operation: format!("create records directory {parent:?}"),
                source,
            })?;
        }

        let file = File::create(&self.path).map_err(|source| Error::Io {
            operation: format!("create records file {:?}", self.path),
            source,
        })?;

        serde_json::to_writer_pretty(BufWriter::new(file), records)?;
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    #[instrument(level = "debug", skip(self, record), fields(path = ?self.path))]
    fn append(&self, record: GameRecord) -> Result<()> {
        let mut records = self.read_all()?;
        records.insert(0, record);
        self.write_all(&records)
    }

    #[instrument(level = "debug", skip(self), fields(path = ?self.path))]
    fn delete(&self, id: &RecordId) -> Result<bool> {
        let mut records = self.read_all()?;
        let before = records.len();
        records.retain(|record| record.id != *id);

        if records.len() == before {
            return Ok(false);
        }
        self.write_all(&records)?;
        Ok(true)
    }

    #[instrument(level = "debug", skip(self), fields(path = ?self.path))]
    fn clear(&self) -> Result<()> {
        self.write_all(&[])
    }

    fn records(&self) -> Result<Vec<GameRecord>> {
        self.read_all()
    }
}
