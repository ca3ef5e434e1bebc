//! Repository boundary for durable journal storage.
//!
//! Storage is a flat ordered collection: `load` reads all of it and `save`
//! overwrites all of it. Both are all-or-nothing; a failed `save` must leave
//! the previous contents readable.

use std::cell::RefCell;

use super::error::PersistenceError;
use super::types::JournalEntry;

/// Durable storage for the full entry collection.
pub trait JournalRepository {
    /// Reads every persisted entry in stored order.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the storage is unreadable or corrupt.
    fn load(&self) -> Result<Vec<JournalEntry>, PersistenceError>;

    /// Overwrites storage with the given entries.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Unwritable` if the write fails.
    fn save(&self, entries: &[JournalEntry]) -> Result<(), PersistenceError>;
}

impl<R: JournalRepository + ?Sized> JournalRepository for &R {
    fn load(&self) -> Result<Vec<JournalEntry>, PersistenceError> {
        (**self).load()
    }

    fn save(&self, entries: &[JournalEntry]) -> Result<(), PersistenceError> {
        (**self).save(entries)
    }
}

/// Repository that keeps entries in memory only.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    entries: RefCell<Vec<JournalEntry>>,
}

impl InMemoryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with entries.
    #[must_use]
    pub fn with_entries(entries: Vec<JournalEntry>) -> Self {
        Self {
            entries: RefCell::new(entries),
        }
    }

    /// Snapshot of the stored entries.
    #[must_use]
    pub fn snapshot(&self) -> Vec<JournalEntry> {
        self.entries.borrow().clone()
    }
}

impl JournalRepository for InMemoryRepository {
    fn load(&self) -> Result<Vec<JournalEntry>, PersistenceError> {
        Ok(self.entries.borrow().clone())
    }

    fn save(&self, entries: &[JournalEntry]) -> Result<(), PersistenceError> {
        *self.entries.borrow_mut() = entries.to_vec();
        Ok(())
    }
}
