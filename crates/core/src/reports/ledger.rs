//! Account ledger projection.

use rust_decimal::Decimal;

use super::error::ReportError;
use super::range::DateRange;
use super::service::ReportService;
use super::types::{AccountLedgerReport, LedgerRow};

impl ReportService<'_> {
    /// Chronological movements of one account with a running balance.
    ///
    /// Movements are ordered by date; same-date movements keep journal
    /// order. The running balance starts at zero and is debit-positive.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::NoMovement` if the account has no lines in range.
    pub fn account_ledger(
        &self,
        account: &str,
        range: DateRange,
    ) -> Result<AccountLedgerReport, ReportError> {
        tracing::debug!(account, from = %range.from(), to = %range.to(), "Computing account ledger");

        let mut movements: Vec<_> = self
            .entries_in(range)
            .flat_map(|entry| entry.lines_for(account).map(move |line| (entry, line)))
            .collect();

        if movements.is_empty() {
            return Err(ReportError::NoMovement {
                account: account.to_string(),
            });
        }
        movements.sort_by_key(|(entry, _)| entry.date);

        let mut balance = Decimal::ZERO;
        let mut total_debit = Decimal::ZERO;
        let mut total_credit = Decimal::ZERO;
        let rows = movements
            .into_iter()
            .map(|(entry, line)| {
                balance += line.net_debit();
                total_debit += line.debit;
                total_credit += line.credit;
                LedgerRow {
                    entry_id: entry.id,
                    date: entry.date,
                    description: entry.description.clone(),
                    debit: line.debit,
                    credit: line.credit,
                    balance,
                }
            })
            .collect();

        Ok(AccountLedgerReport {
            account: account.to_string(),
            range,
            rows,
            total_debit,
            total_credit,
            closing_balance: balance,
        })
    }
}
