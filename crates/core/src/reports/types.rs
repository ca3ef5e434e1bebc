//! Report data types.
//!
//! All reports are plain data. Formatting and currency display belong to
//! the presentation layer.

use chrono::NaiveDate;
use farmbook_shared::types::EntryId;
use rust_decimal::Decimal;
use serde::Serialize;

use super::error::IntegrityError;
use super::range::DateRange;
use crate::catalog::CashFlowActivity;

/// One movement in an account ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerRow {
    /// Entry the movement belongs to.
    pub entry_id: EntryId,
    /// Entry date.
    pub date: NaiveDate,
    /// Entry description.
    pub description: String,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// Running balance after this movement, debit-positive.
    pub balance: Decimal,
}

/// Chronological movements of one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountLedgerReport {
    /// Account name.
    pub account: String,
    /// Reporting period.
    pub range: DateRange,
    /// Movements, oldest first.
    pub rows: Vec<LedgerRow>,
    /// Sum of debits.
    pub total_debit: Decimal,
    /// Sum of credits.
    pub total_credit: Decimal,
    /// Balance after the last movement.
    pub closing_balance: Decimal,
}

/// One account in the trial balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialBalanceRow {
    /// Account name.
    pub account: String,
    /// Net debit balance, zero unless the account nets to debit.
    pub debit_balance: Decimal,
    /// Net credit balance, zero unless the account nets to credit.
    pub credit_balance: Decimal,
}

/// Trial balance totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialBalanceTotals {
    /// Total of the debit column.
    pub total_debit: Decimal,
    /// Total of the credit column.
    pub total_credit: Decimal,
    /// Whether the columns agree within tolerance.
    pub is_balanced: bool,
}

/// Trial balance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialBalanceReport {
    /// Reporting period.
    pub range: DateRange,
    /// Every account referenced by the journal, sorted by name.
    pub rows: Vec<TrialBalanceRow>,
    /// Column totals.
    pub totals: TrialBalanceTotals,
}

impl TrialBalanceReport {
    /// Fails if the columns disagree.
    ///
    /// # Errors
    ///
    /// Returns `IntegrityError::TrialBalanceUnbalanced` when not balanced.
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        if self.totals.is_balanced {
            Ok(())
        } else {
            Err(IntegrityError::TrialBalanceUnbalanced {
                total_debit: self.totals.total_debit,
                total_credit: self.totals.total_credit,
            })
        }
    }
}

/// Amount of one account in an income statement section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncomeLine {
    /// Account name.
    pub account: String,
    /// Movement in the range, in the account's normal direction.
    pub amount: Decimal,
}

/// Revenue or expense section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IncomeSection {
    /// Accounts in catalog order, including zero rows.
    pub lines: Vec<IncomeLine>,
    /// Section total.
    pub total: Decimal,
}

impl IncomeSection {
    pub(super) fn push(&mut self, account: &str, amount: Decimal) {
        self.total += amount;
        self.lines.push(IncomeLine {
            account: account.to_string(),
            amount,
        });
    }
}

/// Whether the period closed with a profit or a loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NetOutcome {
    /// Net result is zero or positive.
    NetIncome,
    /// Net result is negative.
    NetLoss,
}

/// Income statement report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncomeStatementReport {
    /// Reporting period.
    pub range: DateRange,
    /// Revenue accounts.
    pub revenue: IncomeSection,
    /// Inventory balance before the period.
    pub beginning_inventory: Decimal,
    /// Net movement of the cost-of-revenue accounts in the period.
    pub cost_of_goods_purchased: Decimal,
    /// Inventory balance at the end of the period.
    pub ending_inventory: Decimal,
    /// Purchases adjusted for the inventory change.
    pub cost_of_goods_sold: Decimal,
    /// Revenue minus cost of goods sold.
    pub gross_profit: Decimal,
    /// Expense accounts.
    pub expenses: IncomeSection,
    /// Gross profit minus expenses.
    pub net_result: Decimal,
    /// Profit or loss.
    pub outcome: NetOutcome,
}

/// Sign of an activity total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CashDirection {
    /// The activity brought cash in (or was flat).
    Received,
    /// The activity consumed cash.
    Used,
}

/// One labelled line of a cash-flow activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CashFlowCategory {
    /// Category label.
    pub label: String,
    /// Net cash effect, inflow-positive.
    pub amount: Decimal,
    /// False when the category netted to zero over the range.
    pub has_activity: bool,
}

/// Operating, investing or financing section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivitySection {
    /// The activity bucket.
    pub activity: CashFlowActivity,
    /// Categories in catalog order.
    pub categories: Vec<CashFlowCategory>,
    /// Net cash effect of the activity.
    pub total: Decimal,
    /// True if any category moved.
    pub has_activity: bool,
    /// Whether the activity received or used cash.
    pub direction: CashDirection,
}

/// Agreement between the two net-change figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CashReconciliation {
    /// Activity total minus the direct cash change.
    pub difference: Decimal,
    /// Whether the figures agree within tolerance.
    pub is_reconciled: bool,
}

/// Cash-flow statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CashFlowStatement {
    /// Reporting period.
    pub range: DateRange,
    /// Operating activities.
    pub operating: ActivitySection,
    /// Investing activities.
    pub investing: ActivitySection,
    /// Financing activities.
    pub financing: ActivitySection,
    /// Sum of the three activity totals.
    pub net_cash_change: Decimal,
    /// Cash balance before the period.
    pub beginning_cash: Decimal,
    /// Cash balance at the end of the period.
    pub ending_cash: Decimal,
    /// Ending minus beginning cash.
    pub direct_cash_change: Decimal,
    /// Comparison of `net_cash_change` with `direct_cash_change`.
    pub reconciliation: CashReconciliation,
}

impl CashFlowStatement {
    /// Fails if the activity totals do not explain the change in cash.
    ///
    /// # Errors
    ///
    /// Returns `IntegrityError::CashFlowMismatch` when not reconciled.
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        if self.reconciliation.is_reconciled {
            Ok(())
        } else {
            Err(IntegrityError::CashFlowMismatch {
                activities: self.net_cash_change,
                direct: self.direct_cash_change,
            })
        }
    }
}
