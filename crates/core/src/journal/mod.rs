//! Double-entry journal.
//!
//! This module implements the transaction side of the bookkeeping core:
//! - Journal lines and entries
//! - Entry validation (balance and structural rules)
//! - The in-memory journal store
//! - Repository and clock boundaries
//! - The journal service that ties them together

pub mod clock;
pub mod error;
pub mod repository;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{LedgerError, PersistenceError, ValidationError};
pub use repository::{InMemoryRepository, JournalRepository};
pub use service::JournalService;
pub use store::JournalStore;
pub use types::{EntryDraft, JournalEntry, Line, ValidatedEntry};
pub use validation::{BALANCE_TOLERANCE, validate, validate_accounts, within_tolerance};
