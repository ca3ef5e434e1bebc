//! On-disk record types.

pub mod journal;

pub use journal::{EntryRecord, JournalFile, LineRecord};
