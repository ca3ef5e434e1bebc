//! In-memory journal store.
//!
//! The store is the sole owner of entry identity and of the ordered entry
//! collection. Reports borrow its contents; they never keep a copy.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use farmbook_shared::types::EntryId;

use super::error::LedgerError;
use super::types::{JournalEntry, ValidatedEntry};

/// Ordered collection of admitted entries, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalStore {
    entries: Vec<JournalEntry>,
}

impl JournalStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from previously persisted entries, keeping their order.
    #[must_use]
    pub fn from_entries(entries: Vec<JournalEntry>) -> Self {
        Self { entries }
    }

    /// Appends a validated entry under a freshly generated id.
    pub fn append(&mut self, entry: ValidatedEntry) -> JournalEntry {
        let mut id = EntryId::new();
        while self.position(id).is_some() {
            id = EntryId::new();
        }
        let entry = entry.into_entry(id);
        self.entries.push(entry.clone());
        entry
    }

    /// Replaces every field except the id of an existing entry.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NotFound` if no entry has the given id.
    pub fn replace(&mut self, id: EntryId, entry: ValidatedEntry) -> Result<JournalEntry, LedgerError> {
        let position = self.position(id).ok_or(LedgerError::NotFound(id))?;
        let entry = entry.into_entry(id);
        self.entries[position] = entry.clone();
        Ok(entry)
    }

    /// Removes an entry by id.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NotFound` if no entry has the given id.
    pub fn remove(&mut self, id: EntryId) -> Result<JournalEntry, LedgerError> {
        let position = self.position(id).ok_or(LedgerError::NotFound(id))?;
        Ok(self.entries.remove(position))
    }

    /// Looks up an entry by id.
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn all(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Entries newest first: date descending, later insertions first on the same date.
    #[must_use]
    pub fn by_date_descending(&self) -> Vec<&JournalEntry> {
        let mut sorted: Vec<&JournalEntry> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.date);
        sorted.reverse();
        sorted
    }

    /// Every account referenced by any entry, sorted by name.
    #[must_use]
    pub fn accounts(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .flat_map(|e| e.lines.iter().map(|l| l.account.as_str()))
            .collect()
    }

    /// Date of the oldest entry.
    #[must_use]
    pub fn earliest_date(&self) -> Option<NaiveDate> {
        self.entries.iter().map(|e| e.date).min()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the store, returning its entries in insertion order.
    #[must_use]
    pub fn into_entries(self) -> Vec<JournalEntry> {
        self.entries
    }

    fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }
}
