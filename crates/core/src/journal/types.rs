//! Journal domain types.

use chrono::NaiveDate;
use farmbook_shared::types::EntryId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One side of a journal entry.
///
/// A line is a debit movement, a credit movement, or empty. Empty lines are
/// dropped on admission; a line with both sides set is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Account name.
    pub account: String,
    /// Debit amount (non-negative).
    pub debit: Decimal,
    /// Credit amount (non-negative).
    pub credit: Decimal,
}

impl Line {
    /// Creates a debit line.
    #[must_use]
    pub fn debit(account: impl Into<String>, amount: Decimal) -> Self {
        Self {
            account: account.into(),
            debit: amount,
            credit: Decimal::ZERO,
        }
    }

    /// Creates a credit line.
    #[must_use]
    pub fn credit(account: impl Into<String>, amount: Decimal) -> Self {
        Self {
            account: account.into(),
            debit: Decimal::ZERO,
            credit: amount,
        }
    }

    /// Returns true if neither side carries an amount.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.debit.is_zero() && self.credit.is_zero()
    }

    /// Signed amount, debit-positive.
    #[must_use]
    pub fn net_debit(&self) -> Decimal {
        self.debit - self.credit
    }

    /// Signed amount, credit-positive.
    #[must_use]
    pub fn net_credit(&self) -> Decimal {
        self.credit - self.debit
    }
}

/// A candidate entry submitted for admission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    /// Transaction date.
    pub date: NaiveDate,
    /// Free-text description.
    pub description: String,
    /// Lines in input order, possibly including empty ones.
    pub lines: Vec<Line>,
}

impl EntryDraft {
    /// Creates a draft.
    #[must_use]
    pub fn new(date: NaiveDate, description: impl Into<String>, lines: Vec<Line>) -> Self {
        Self {
            date,
            description: description.into(),
            lines,
        }
    }
}

/// An entry that passed validation but has not been assigned an id.
///
/// Only `validate` constructs this type, so holding one proves the
/// balance and structural rules hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEntry {
    pub(super) date: NaiveDate,
    pub(super) description: String,
    pub(super) lines: Vec<Line>,
}

impl ValidatedEntry {
    /// Transaction date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Trimmed description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Non-empty lines in input order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Attaches an id, producing a journal entry.
    #[must_use]
    pub fn into_entry(self, id: EntryId) -> JournalEntry {
        JournalEntry {
            id,
            date: self.date,
            description: self.description,
            lines: self.lines,
        }
    }
}

/// An admitted journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Store-assigned identifier.
    pub id: EntryId,
    /// Transaction date.
    pub date: NaiveDate,
    /// Free-text description.
    pub description: String,
    /// Lines in input order.
    pub lines: Vec<Line>,
}

impl JournalEntry {
    /// Sum of all debit amounts.
    #[must_use]
    pub fn total_debit(&self) -> Decimal {
        self.lines.iter().map(|l| l.debit).sum()
    }

    /// Sum of all credit amounts.
    #[must_use]
    pub fn total_credit(&self) -> Decimal {
        self.lines.iter().map(|l| l.credit).sum()
    }

    /// Lines posted to the given account.
    pub fn lines_for<'a>(&'a self, account: &'a str) -> impl Iterator<Item = &'a Line> + 'a {
        self.lines.iter().filter(move |l| l.account == account)
    }
}
