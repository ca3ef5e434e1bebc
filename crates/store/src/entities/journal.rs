//! Journal file records.
//!
//! Field names are the keys of existing data files and must not change.

use chrono::NaiveDate;
use farmbook_core::journal::{JournalEntry, Line, PersistenceError};
use farmbook_shared::types::EntryId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Top-level journal file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalFile {
    /// Entries in stored order.
    #[serde(default)]
    pub jurnal_umum: Vec<EntryRecord>,
}

/// One stored journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    /// Entry id.
    pub id: String,
    /// Date as `YYYY-MM-DD`.
    pub tanggal: String,
    /// Description.
    pub deskripsi: String,
    /// Lines.
    pub entri: Vec<LineRecord>,
}

/// One stored journal line.
///
/// Amounts are written as strings. Numbers are accepted on read because
/// older files stored floats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    /// Account name.
    pub akun: String,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub kredit: Decimal,
}

impl JournalFile {
    /// Builds a file image from journal entries.
    #[must_use]
    pub fn from_entries(entries: &[JournalEntry]) -> Self {
        Self {
            jurnal_umum: entries.iter().map(EntryRecord::from).collect(),
        }
    }

    /// Converts every record back into a journal entry.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Corrupt` for the first record with an
    /// invalid id or date.
    pub fn into_entries(self) -> Result<Vec<JournalEntry>, PersistenceError> {
        self.jurnal_umum
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_entry(index))
            .collect()
    }
}

impl From<&JournalEntry> for EntryRecord {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            tanggal: entry.date.format(DATE_FORMAT).to_string(),
            deskripsi: entry.description.clone(),
            entri: entry
                .lines
                .iter()
                .map(|line| LineRecord {
                    akun: line.account.clone(),
                    debit: line.debit,
                    kredit: line.credit,
                })
                .collect(),
        }
    }
}

impl EntryRecord {
    fn into_entry(self, index: usize) -> Result<JournalEntry, PersistenceError> {
        let id: EntryId = self.id.parse().map_err(|err| {
            PersistenceError::Corrupt(format!("entry {}: invalid id '{}': {err}", index + 1, self.id))
        })?;
        let date = NaiveDate::parse_from_str(&self.tanggal, DATE_FORMAT).map_err(|err| {
            PersistenceError::Corrupt(format!(
                "entry {}: invalid date '{}': {err}",
                index + 1,
                self.tanggal
            ))
        })?;

        Ok(JournalEntry {
            id,
            date,
            description: self.deskripsi,
            lines: self
                .entri
                .into_iter()
                .map(|line| Line {
                    account: line.akun,
                    debit: line.debit,
                    credit: line.kredit,
                })
                .collect(),
        })
    }
}
