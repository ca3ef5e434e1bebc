//! Cash-flow statement, direct method.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::error::ReportError;
use super::range::DateRange;
use super::service::ReportService;
use super::types::{
    ActivitySection, CashDirection, CashFlowCategory, CashFlowStatement, CashReconciliation,
};
use crate::catalog::CashFlowActivity;

impl ReportService<'_> {
    /// Cash-flow statement over a range.
    ///
    /// Each line in range adds `credit - debit` to the category its account
    /// is tagged with. The sum of the three activities is compared with the
    /// direct change in cash-equivalent balances; a mismatch is reported in
    /// `reconciliation` and logged, never corrected.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::NoData` if the journal is empty.
    pub fn cash_flow(&self, range: DateRange) -> Result<CashFlowStatement, ReportError> {
        self.ensure_data()?;
        tracing::debug!(from = %range.from(), to = %range.to(), "Computing cash-flow statement");

        let mut movement: HashMap<&str, Decimal> = HashMap::new();
        for line in self.lines_in(range) {
            *movement.entry(line.account.as_str()).or_default() += line.net_credit();
        }

        let operating = self.activity_section(CashFlowActivity::Operating, &movement);
        let investing = self.activity_section(CashFlowActivity::Investing, &movement);
        let financing = self.activity_section(CashFlowActivity::Financing, &movement);
        let net_cash_change = operating.total + investing.total + financing.total;

        let cash: Vec<&str> = self.catalog.cash_accounts().collect();
        let beginning_cash = self.balance_where(&cash, |d| range.is_before_start(d));
        let ending_cash = self.balance_where(&cash, |d| range.is_on_or_before_end(d));
        let direct_cash_change = ending_cash - beginning_cash;

        let difference = net_cash_change - direct_cash_change;
        let is_reconciled = difference.abs() <= self.tolerance_in(range);
        if !is_reconciled {
            tracing::warn!(
                %net_cash_change,
                %direct_cash_change,
                %difference,
                from = %range.from(),
                to = %range.to(),
                "Cash-flow activities do not reconcile with cash balances"
            );
        }

        Ok(CashFlowStatement {
            range,
            operating,
            investing,
            financing,
            net_cash_change,
            beginning_cash,
            ending_cash,
            direct_cash_change,
            reconciliation: CashReconciliation {
                difference,
                is_reconciled,
            },
        })
    }

    fn activity_section(
        &self,
        activity: CashFlowActivity,
        movement: &HashMap<&str, Decimal>,
    ) -> ActivitySection {
        let categories: Vec<CashFlowCategory> = self
            .catalog
            .cash_flow_categories(activity)
            .into_iter()
            .map(|category| {
                let amount: Decimal = category
                    .accounts
                    .iter()
                    .filter_map(|account| movement.get(account))
                    .sum();
                CashFlowCategory {
                    label: category.label.to_string(),
                    amount,
                    has_activity: !amount.is_zero(),
                }
            })
            .collect();

        let total: Decimal = categories.iter().map(|c| c.amount).sum();
        let direction = if total < Decimal::ZERO {
            CashDirection::Used
        } else {
            CashDirection::Received
        };

        ActivitySection {
            activity,
            has_activity: categories.iter().any(|c| c.has_activity),
            categories,
            total,
            direction,
        }
    }
}
