//! In-memory record store for testing.
//!
//! This adapter provides a pure in-memory implementation of
//! [`RecordStore`], enabling fast tests without any file system IO.

use std::sync::{Arc, Mutex};

use crate::{Result, identifiers::RecordId, ports::RecordStore, records::GameRecord};

/// In-memory record store.
///
/// Stores records in a shared `Vec`, newest first. Clones share the same
/// underlying storage, so a store handed to the code under test can be
/// inspected afterwards through the original handle.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Arc<Mutex<Vec<GameRecord>>>,
}

impl InMemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored.
    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

impl RecordStore for InMemoryStore {
    fn append(&self, record: GameRecord) -> Result<()> {
        self.records.lock().unwrap().insert(0, record);
        Ok(())
    }

    fn delete(&self, id: &RecordId) -> Result<bool> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|record| record.id != *id);
        Ok(records.len() != before)
    }

    fn clear(&self) -> Result<()> {
        self.records.lock().unwrap().clear();
        Ok(())
    }

    fn records(&self) -> Result<Vec<GameRecord>> {
        Ok(self.records.lock().unwrap().clone())
    }
}
