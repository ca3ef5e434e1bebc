//! Income statement with inventory-adjusted cost of goods sold.

use rust_decimal::Decimal;

use super::error::ReportError;
use super::range::DateRange;
use super::service::ReportService;
use super::types::{IncomeSection, IncomeStatementReport, NetOutcome};
use crate::catalog::IncomeRole;

impl ReportService<'_> {
    /// Income statement over a range.
    ///
    /// Revenue, purchases and expenses are movements within the range.
    /// Inventory is a balance: beginning is everything dated before
    /// `range.from`, ending is everything through `range.to`.
    ///
    /// `cost_of_goods_sold = purchases + beginning_inventory - ending_inventory`
    ///
    /// # Errors
    ///
    /// Returns `ReportError::NoData` if the journal is empty.
    pub fn income_statement(&self, range: DateRange) -> Result<IncomeStatementReport, ReportError> {
        self.ensure_data()?;
        tracing::debug!(from = %range.from(), to = %range.to(), "Computing income statement");

        let mut revenue = IncomeSection::default();
        for account in self.catalog.accounts_with_role(IncomeRole::Revenue) {
            revenue.push(account, self.net_credit_in(account, range));
        }

        let cost_of_goods_purchased: Decimal = self
            .catalog
            .accounts_with_role(IncomeRole::CostOfGoodsSold)
            .map(|account| -self.net_credit_in(account, range))
            .sum();

        let inventory = [self.catalog.inventory_account()];
        let beginning_inventory = self.balance_where(&inventory, |d| range.is_before_start(d));
        let ending_inventory = self.balance_where(&inventory, |d| range.is_on_or_before_end(d));
        let cost_of_goods_sold = cost_of_goods_purchased + beginning_inventory - ending_inventory;
        let gross_profit = revenue.total - cost_of_goods_sold;

        let mut expenses = IncomeSection::default();
        for account in self.catalog.accounts_with_role(IncomeRole::Expense) {
            expenses.push(account, -self.net_credit_in(account, range));
        }

        let net_result = gross_profit - expenses.total;
        let outcome = if net_result < Decimal::ZERO {
            NetOutcome::NetLoss
        } else {
            NetOutcome::NetIncome
        };

        Ok(IncomeStatementReport {
            range,
            revenue,
            beginning_inventory,
            cost_of_goods_purchased,
            ending_inventory,
            cost_of_goods_sold,
            gross_profit,
            expenses,
            net_result,
            outcome,
        })
    }
}
