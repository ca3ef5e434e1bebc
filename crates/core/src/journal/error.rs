//! Journal error types.
//!
//! This module defines the errors of journal operations:
//! - `ValidationError` - a candidate entry violates a bookkeeping rule
//! - `PersistenceError` - durable storage could not be read or written
//! - `LedgerError` - the umbrella returned by journal service CRUD

use farmbook_shared::AppError;
use farmbook_shared::types::EntryId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Rejection reasons for a candidate entry.
///
/// Always recoverable; a rejected entry is never partially applied.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A line carries both a debit and a credit amount.
    #[error("Line {line}: debit and credit cannot both be filled")]
    MixedSign {
        /// 1-based line position in the submitted draft.
        line: usize,
    },

    /// A line carries a negative amount.
    #[error("Line {line}: amounts cannot be negative")]
    NegativeAmount {
        /// 1-based line position in the submitted draft.
        line: usize,
    },

    /// No line carries a nonzero amount.
    #[error("Enter at least one debit or credit amount")]
    EmptyAmounts,

    /// Fewer than two accounts are touched.
    #[error("Entry must have at least 2 lines, got {count}")]
    TooFewLines {
        /// Number of non-empty lines.
        count: usize,
    },

    /// Debits and credits differ by more than the tolerance.
    #[error("Entry is not balanced. Debit: {debit}, Credit: {credit}")]
    Unbalanced {
        /// Total debit amount.
        debit: Decimal,
        /// Total credit amount.
        credit: Decimal,
    },

    /// A line references an account missing from the catalog.
    #[error("Unknown account: {0}")]
    UnknownAccount(String),
}

impl ValidationError {
    /// Returns the error code for structured output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MixedSign { .. } => "MIXED_SIGN",
            Self::NegativeAmount { .. } => "NEGATIVE_AMOUNT",
            Self::EmptyAmounts => "EMPTY_AMOUNTS",
            Self::TooFewLines { .. } => "TOO_FEW_LINES",
            Self::Unbalanced { .. } => "UNBALANCED",
            Self::UnknownAccount(_) => "UNKNOWN_ACCOUNT",
        }
    }
}

/// Failures of the durable journal storage.
///
/// Fatal to the operation in progress.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersistenceError {
    /// Storage exists but could not be read.
    #[error("Journal storage unreadable: {0}")]
    Unreadable(String),

    /// Storage was read but its contents are malformed.
    #[error("Journal storage corrupt: {0}")]
    Corrupt(String),

    /// Storage could not be written.
    #[error("Journal storage unwritable: {0}")]
    Unwritable(String),
}

impl PersistenceError {
    /// Returns the error code for structured output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unreadable(_) => "STORAGE_UNREADABLE",
            Self::Corrupt(_) => "STORAGE_CORRUPT",
            Self::Unwritable(_) => "STORAGE_UNWRITABLE",
        }
    }
}

/// Errors returned by journal CRUD operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// The candidate entry was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No entry with the given id exists.
    #[error("Journal entry not found: {0}")]
    NotFound(EntryId),

    /// The change could not be persisted; memory was left untouched.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl LedgerError {
    /// Returns the error code for structured output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(err) => err.error_code(),
            Self::NotFound(_) => "ENTRY_NOT_FOUND",
            Self::Persistence(err) => err.error_code(),
        }
    }

    /// Returns true if the caller can fix the input and retry.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Persistence(_))
    }
}

impl From<PersistenceError> for AppError {
    fn from(err: PersistenceError) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Validation(inner) => Self::Validation(inner.to_string()),
            LedgerError::NotFound(id) => Self::NotFound(format!("journal entry {id}")),
            LedgerError::Persistence(inner) => inner.into(),
        }
    }
}
