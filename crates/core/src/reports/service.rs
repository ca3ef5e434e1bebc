//! Report generation service.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::ReportError;
use super::range::DateRange;
use crate::catalog::AccountCatalog;
use crate::journal::{BALANCE_TOLERANCE, JournalEntry, Line};

/// Generates reports from a borrowed journal.
///
/// Reports are pure functions of the catalog, the entries and a range. The
/// individual reports live in sibling modules as `impl` blocks.
#[derive(Debug, Clone, Copy)]
pub struct ReportService<'a> {
    pub(super) catalog: &'a AccountCatalog,
    pub(super) entries: &'a [JournalEntry],
}

impl<'a> ReportService<'a> {
    /// Creates a report service.
    #[must_use]
    pub fn new(catalog: &'a AccountCatalog, entries: &'a [JournalEntry]) -> Self {
        Self { catalog, entries }
    }

    pub(super) fn ensure_data(&self) -> Result<(), ReportError> {
        if self.entries.is_empty() {
            return Err(ReportError::NoData);
        }
        Ok(())
    }

    /// Entries dated within the range, in insertion order.
    pub(super) fn entries_in(&self, range: DateRange) -> impl Iterator<Item = &'a JournalEntry> {
        self.entries.iter().filter(move |e| range.contains(e.date))
    }

    /// Largest debit/credit gap the entries in range may carry in total.
    ///
    /// Each admitted entry may be off by up to `BALANCE_TOLERANCE`, so the
    /// allowance grows with the entry count and never drops below one entry's.
    pub(super) fn tolerance_in(&self, range: DateRange) -> Decimal {
        let count = self.entries_in(range).count().max(1);
        BALANCE_TOLERANCE * Decimal::from(count)
    }

    /// Lines of entries dated within the range.
    pub(super) fn lines_in(&self, range: DateRange) -> impl Iterator<Item = &'a Line> {
        self.entries_in(range).flat_map(|e| e.lines.iter())
    }

    /// Debit-positive balance of the given accounts over entries whose date passes `keep`.
    pub(super) fn balance_where<F>(&self, accounts: &[&str], keep: F) -> Decimal
    where
        F: Fn(NaiveDate) -> bool,
    {
        self.entries
            .iter()
            .filter(|e| keep(e.date))
            .flat_map(|e| e.lines.iter())
            .filter(|l| accounts.contains(&l.account.as_str()))
            .map(Line::net_debit)
            .sum()
    }

    /// Credit-positive movement of one account within the range.
    pub(super) fn net_credit_in(&self, account: &str, range: DateRange) -> Decimal {
        self.lines_in(range)
            .filter(|l| l.account == account)
            .map(Line::net_credit)
            .sum()
    }
}
