//! Journal service: entry CRUD over a repository, plus report access.

use std::collections::BTreeSet;
use std::sync::Arc;

use farmbook_shared::types::EntryId;

use super::clock::Clock;
use super::error::{LedgerError, PersistenceError};
use super::repository::JournalRepository;
use super::store::JournalStore;
use super::types::{EntryDraft, JournalEntry, ValidatedEntry};
use super::validation::{validate, validate_accounts};
use crate::catalog::AccountCatalog;
use crate::reports::{
    AccountLedgerReport, CashFlowStatement, DateRange, IncomeStatementReport, ReportError,
    ReportService, TrialBalanceReport,
};

/// Entry point for presentation layers.
///
/// Holds the in-memory journal and keeps it in step with the repository.
/// Every mutation is applied to a copy of the store and persisted first; the
/// in-memory journal changes only after the save succeeds.
pub struct JournalService<R, C> {
    repository: R,
    clock: C,
    catalog: Arc<AccountCatalog>,
    store: JournalStore,
}

impl<R: JournalRepository, C: Clock> JournalService<R, C> {
    /// Loads the journal from the repository.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the repository cannot be read.
    pub fn open(
        repository: R,
        clock: C,
        catalog: Arc<AccountCatalog>,
    ) -> Result<Self, PersistenceError> {
        let entries = repository.load().inspect_err(|err| {
            tracing::error!(error = %err, "Failed to load journal");
        })?;
        tracing::debug!(entries = entries.len(), "Journal loaded");

        Ok(Self {
            repository,
            clock,
            catalog,
            store: JournalStore::from_entries(entries),
        })
    }

    /// The account catalog shared with the reports.
    #[must_use]
    pub fn catalog(&self) -> &AccountCatalog {
        &self.catalog
    }

    /// Validates and appends a new entry.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` if the draft is rejected, or
    /// `LedgerError::Persistence` if the change could not be saved.
    pub fn submit(&mut self, draft: EntryDraft) -> Result<JournalEntry, LedgerError> {
        let validated = self.admit(draft)?;

        let mut next = self.store.clone();
        let entry = next.append(validated);
        self.commit(next)?;

        tracing::info!(entry_id = %entry.id, date = %entry.date, "Journal entry submitted");
        Ok(entry)
    }

    /// Re-validates a draft and replaces every field of an existing entry except its id.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NotFound` for an unknown id, `LedgerError::Validation`
    /// if the draft is rejected, or `LedgerError::Persistence` if the change
    /// could not be saved. The original entry is untouched in every case.
    pub fn update(&mut self, id: EntryId, draft: EntryDraft) -> Result<JournalEntry, LedgerError> {
        if self.store.get(id).is_none() {
            return Err(LedgerError::NotFound(id));
        }
        let validated = self.admit(draft)?;

        let mut next = self.store.clone();
        let entry = next.replace(id, validated)?;
        self.commit(next)?;

        tracing::info!(entry_id = %id, date = %entry.date, "Journal entry updated");
        Ok(entry)
    }

    /// Removes an entry by id.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NotFound` for an unknown id, or
    /// `LedgerError::Persistence` if the change could not be saved.
    pub fn remove(&mut self, id: EntryId) -> Result<JournalEntry, LedgerError> {
        let mut next = self.store.clone();
        let removed = next.remove(id)?;
        self.commit(next)?;

        tracing::info!(entry_id = %id, "Journal entry removed");
        Ok(removed)
    }

    /// Entries newest first.
    #[must_use]
    pub fn list_descending_by_date(&self) -> Vec<&JournalEntry> {
        self.store.by_date_descending()
    }

    /// Looks up an entry by id.
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&JournalEntry> {
        self.store.get(id)
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[JournalEntry] {
        self.store.all()
    }

    /// Accounts referenced by at least one entry, sorted by name.
    #[must_use]
    pub fn accounts_in_use(&self) -> BTreeSet<&str> {
        self.store.accounts()
    }

    /// The default report window: earliest entry date through today.
    ///
    /// `to` is clamped to `from` when every entry is dated in the future.
    /// Returns `None` for an empty journal.
    #[must_use]
    pub fn default_range(&self) -> Option<DateRange> {
        let from = self.store.earliest_date()?;
        let to = self.clock.today().max(from);
        DateRange::new(from, to).ok()
    }

    /// Report generator over the current journal.
    #[must_use]
    pub fn reports(&self) -> ReportService<'_> {
        ReportService::new(&self.catalog, self.store.all())
    }

    /// Chronological movements and running balance of one account.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::NoMovement` if the account has no lines in range.
    pub fn account_ledger(
        &self,
        account: &str,
        range: DateRange,
    ) -> Result<AccountLedgerReport, ReportError> {
        self.reports().account_ledger(account, range)
    }

    /// Trial balance over a range.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::NoData` for an empty journal.
    pub fn trial_balance(&self, range: DateRange) -> Result<TrialBalanceReport, ReportError> {
        self.reports().trial_balance(range)
    }

    /// Income statement over a range.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::NoData` for an empty journal.
    pub fn income_statement(&self, range: DateRange) -> Result<IncomeStatementReport, ReportError> {
        self.reports().income_statement(range)
    }

    /// Cash-flow statement over a range.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::NoData` for an empty journal.
    pub fn cash_flow(&self, range: DateRange) -> Result<CashFlowStatement, ReportError> {
        self.reports().cash_flow(range)
    }

    fn admit(&self, draft: EntryDraft) -> Result<ValidatedEntry, LedgerError> {
        let validated = validate(draft).inspect_err(|err| {
            tracing::debug!(code = err.error_code(), error = %err, "Journal entry rejected");
        })?;
        validate_accounts(&self.catalog, &validated)?;
        Ok(validated)
    }

    fn commit(&mut self, next: JournalStore) -> Result<(), LedgerError> {
        self.repository.save(next.all()).inspect_err(|err| {
            tracing::error!(error = %err, "Failed to persist journal; change discarded");
        })?;
        self.store = next;
        Ok(())
    }
}
