//! Trial balance.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;

use super::error::ReportError;
use super::range::DateRange;
use super::service::ReportService;
use super::types::{TrialBalanceReport, TrialBalanceRow, TrialBalanceTotals};

impl ReportService<'_> {
    /// Net balance of every journal account within a range.
    ///
    /// The account universe comes from the whole journal, so rows stay stable
    /// across ranges; accounts without movement in range get two zero columns.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::NoData` if the journal is empty.
    pub fn trial_balance(&self, range: DateRange) -> Result<TrialBalanceReport, ReportError> {
        self.ensure_data()?;
        tracing::debug!(from = %range.from(), to = %range.to(), "Computing trial balance");

        let accounts: BTreeSet<&str> = self
            .entries
            .iter()
            .flat_map(|e| e.lines.iter().map(|l| l.account.as_str()))
            .collect();

        let mut net: BTreeMap<&str, Decimal> =
            accounts.into_iter().map(|a| (a, Decimal::ZERO)).collect();
        for line in self.lines_in(range) {
            if let Some(balance) = net.get_mut(line.account.as_str()) {
                *balance += line.net_debit();
            }
        }

        let rows: Vec<TrialBalanceRow> = net
            .into_iter()
            .map(|(account, balance)| TrialBalanceRow {
                account: account.to_string(),
                debit_balance: balance.max(Decimal::ZERO),
                credit_balance: (-balance).max(Decimal::ZERO),
            })
            .collect();

        let total_debit: Decimal = rows.iter().map(|r| r.debit_balance).sum();
        let total_credit: Decimal = rows.iter().map(|r| r.credit_balance).sum();
        let is_balanced = (total_debit - total_credit).abs() <= self.tolerance_in(range);
        if !is_balanced {
            tracing::error!(
                %total_debit,
                %total_credit,
                from = %range.from(),
                to = %range.to(),
                "Trial balance is not balanced"
            );
        }

        Ok(TrialBalanceReport {
            range,
            rows,
            totals: TrialBalanceTotals {
                total_debit,
                total_credit,
                is_balanced,
            },
        })
    }
}
