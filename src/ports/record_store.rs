//! Record-store port for game history persistence.
//!
//! This module defines the trait boundary between the game engines and the
//! storage layer for finished-game records.

use crate::{Result, identifiers::RecordId, records::GameRecord};

/// Port for the append-only list of finished-game records.
///
/// This trait abstracts the storage mechanism, allowing different
/// implementations (JSON file, in-memory, database, etc.) without coupling
/// game logic to a persistence format. Engines only ever *produce*
/// [`GameRecord`] values; the store owns them from append onward.
///
/// Implementations keep the list newest-first: an appended record is
/// returned ahead of everything stored before it.
///
/// # Examples
///
/// ```
/// use parlor::adapters::InMemoryStore;
/// use parlor::ports::RecordStore;
/// use parlor::records::GameRecord;
/// use parlor::types::{GameKind, GameOutcome, Player};
///
/// let store = InMemoryStore::new();
/// let record = GameRecord::new(GameKind::Othello, GameOutcome::Win(Player::Black), 40, 24, 60);
/// store.append(record)?;
/// assert_eq!(store.records()?.len(), 1);
/// # Ok::<(), parlor::Error>(())
/// ```
pub trait RecordStore {
    /// Append a finished-game record to the front of the list.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or written,
    /// or if serialization fails.
    fn append(&self, record: GameRecord) -> Result<()>;

    /// Delete the record with the given id.
    ///
    /// Returns whether a record was actually removed; deleting an unknown
    /// id is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or written.
    fn delete(&self, id: &RecordId) -> Result<bool>;

    /// Remove every stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn clear(&self) -> Result<()>;

    /// All stored records, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or its
    /// contents fail to deserialize.
    fn records(&self) -> Result<Vec<GameRecord>>;
}
