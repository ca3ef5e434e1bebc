//! JSON file journal repository.

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use farmbook_core::journal::{JournalEntry, JournalRepository, PersistenceError};

use crate::entities::JournalFile;

/// Journal stored as one pretty-printed JSON file.
///
/// Saves go to `<file>.tmp` first and are renamed over the target, so a
/// failed save leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Creates a repository for the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the journal file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn unwritable(&self, err: impl std::fmt::Display) -> PersistenceError {
        PersistenceError::Unwritable(format!("{}: {err}", self.path.display()))
    }
}

impl JournalRepository for JsonFileRepository {
    fn load(&self) -> Result<Vec<JournalEntry>, PersistenceError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Journal file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(PersistenceError::Unreadable(format!(
                    "{}: {err}",
                    self.path.display()
                )));
            }
        };

        let file: JournalFile = serde_json::from_str(&data).map_err(|err| {
            PersistenceError::Corrupt(format!("{}: {err}", self.path.display()))
        })?;
        let entries = file.into_entries()?;

        tracing::debug!(path = %self.path.display(), entries = entries.len(), "Journal file read");
        Ok(entries)
    }

    fn save(&self, entries: &[JournalEntry]) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(&JournalFile::from_entries(entries))
            .map_err(|err| self.unwritable(err))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.unwritable(err))?;
        }

        let staging = self.staging_path();
        fs::write(&staging, json).map_err(|err| self.unwritable(err))?;
        fs::rename(&staging, &self.path).map_err(|err| {
            let _ = fs::remove_file(&staging);
            self.unwritable(err)
        })?;

        tracing::debug!(path = %self.path.display(), entries = entries.len(), "Journal file written");
        Ok(())
    }
}
