//! Account classification types and the catalog itself.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::CatalogError;

/// Account type classification.
///
/// Asset and Expense accounts are debit-normal; Liability, Equity and Revenue
/// accounts are credit-normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Resources owned (cash, receivables, inventory, capitalised purchases).
    Asset,
    /// Obligations owed.
    Liability,
    /// Owner's claims (share capital, dividends).
    Equity,
    /// Income earned.
    Revenue,
    /// Costs incurred.
    Expense,
}

/// Cash-flow activity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CashFlowActivity {
    /// Day-to-day farm operations.
    Operating,
    /// Purchase and sale of long-lived assets.
    Investing,
    /// Share capital and dividends.
    Financing,
}

impl CashFlowActivity {
    /// All buckets in statement order.
    pub const ALL: [Self; 3] = [Self::Operating, Self::Investing, Self::Financing];
}

/// Role an account plays in the income statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeRole {
    /// Counted in total revenue (credit-normal).
    Revenue,
    /// Cost-of-revenue purchases, adjusted for the inventory change.
    CostOfGoodsSold,
    /// General expense.
    Expense,
    /// The single inventory-tracking account.
    Inventory,
}

/// Cash-flow classification of one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowTag {
    /// The activity bucket.
    pub activity: CashFlowActivity,
    /// Human-readable category label within the bucket.
    pub label: String,
}

/// One recognized account and its classification tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDefinition {
    /// Account name as it appears on journal lines.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Whether the account counts towards the cash balance.
    #[serde(default)]
    pub is_cash_equivalent: bool,
    /// Cash-flow classification, if the account feeds the cash-flow statement.
    #[serde(default)]
    pub cash_flow: Option<CashFlowTag>,
    /// Income statement role, if any.
    #[serde(default)]
    pub income_role: Option<IncomeRole>,
}

impl AccountDefinition {
    /// Creates an account with no cash-flow or income tags.
    #[must_use]
    pub fn new(name: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            name: name.into(),
            account_type,
            is_cash_equivalent: false,
            cash_flow: None,
            income_role: None,
        }
    }

    /// Marks the account as a cash equivalent.
    #[must_use]
    pub fn cash(mut self) -> Self {
        self.is_cash_equivalent = true;
        self
    }

    /// Tags the account with a cash-flow category.
    #[must_use]
    pub fn cash_flow(mut self, activity: CashFlowActivity, label: impl Into<String>) -> Self {
        self.cash_flow = Some(CashFlowTag {
            activity,
            label: label.into(),
        });
        self
    }

    /// Tags the account with an income statement role.
    #[must_use]
    pub fn income(mut self, role: IncomeRole) -> Self {
        self.income_role = Some(role);
        self
    }
}

/// Serialized form of a catalog, as read from a configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDefinition {
    /// Account definitions in display order.
    pub accounts: Vec<AccountDefinition>,
}

/// A cash-flow category and the accounts that feed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashFlowCategoryDef<'a> {
    /// Category label.
    pub label: &'a str,
    /// Contributing account names, in catalog order.
    pub accounts: Vec<&'a str>,
}

/// Immutable, validated set of account definitions.
#[derive(Debug, Clone)]
pub struct AccountCatalog {
    accounts: Vec<AccountDefinition>,
    index: HashMap<String, usize>,
    inventory: usize,
}

impl AccountCatalog {
    /// Builds a catalog, checking its structural rules.
    ///
    /// Each account may carry at most one cash-flow tag, so no account can
    /// feed two buckets. A label must stay within a single bucket, exactly one
    /// account must hold the inventory role, and at least one account must be
    /// a cash equivalent.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` describing the first rule violated.
    pub fn new(accounts: Vec<AccountDefinition>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(accounts.len());
        let mut labels: HashMap<String, CashFlowActivity> = HashMap::new();
        let mut inventory: Option<usize> = None;

        for (position, account) in accounts.iter().enumerate() {
            if index.insert(account.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateAccount(account.name.clone()));
            }

            if let Some(tag) = &account.cash_flow {
                match labels.get(tag.label.as_str()) {
                    Some(&first) if first != tag.activity => {
                        return Err(CatalogError::LabelSpansActivities {
                            label: tag.label.clone(),
                            first,
                            second: tag.activity,
                        });
                    }
                    _ => {
                        labels.insert(tag.label.clone(), tag.activity);
                    }
                }
            }

            if account.income_role == Some(IncomeRole::Inventory) {
                if let Some(existing) = inventory {
                    return Err(CatalogError::MultipleInventoryAccounts(
                        accounts[existing].name.clone(),
                        account.name.clone(),
                    ));
                }
                inventory = Some(position);
            }
        }

        let inventory = inventory.ok_or(CatalogError::MissingInventoryAccount)?;
        if !accounts.iter().any(|a| a.is_cash_equivalent) {
            return Err(CatalogError::NoCashAccounts);
        }

        Ok(Self {
            accounts,
            index,
            inventory,
        })
    }

    /// Builds a catalog from its serialized definition.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the definition is malformed.
    pub fn from_definition(definition: CatalogDefinition) -> Result<Self, CatalogError> {
        Self::new(definition.accounts)
    }

    /// All accounts in catalog order.
    #[must_use]
    pub fn accounts(&self) -> &[AccountDefinition] {
        &self.accounts
    }

    /// Looks up an account by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AccountDefinition> {
        self.index.get(name).map(|&i| &self.accounts[i])
    }

    /// Returns true if the account is recognized.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Accounts holding the given income statement role, in catalog order.
    pub fn accounts_with_role(&self, role: IncomeRole) -> impl Iterator<Item = &str> + '_ {
        self.accounts
            .iter()
            .filter(move |a| a.income_role == Some(role))
            .map(|a| a.name.as_str())
    }

    /// Income statement role of an account, if any.
    #[must_use]
    pub fn income_role(&self, name: &str) -> Option<IncomeRole> {
        self.get(name).and_then(|a| a.income_role)
    }

    /// The inventory-tracking account.
    #[must_use]
    pub fn inventory_account(&self) -> &str {
        &self.accounts[self.inventory].name
    }

    /// Returns true if the account counts towards cash.
    #[must_use]
    pub fn is_cash_equivalent(&self, name: &str) -> bool {
        self.get(name).is_some_and(|a| a.is_cash_equivalent)
    }

    /// Cash-equivalent accounts, in catalog order.
    pub fn cash_accounts(&self) -> impl Iterator<Item = &str> + '_ {
        self.accounts
            .iter()
            .filter(|a| a.is_cash_equivalent)
            .map(|a| a.name.as_str())
    }

    /// Cash-flow tag of an account, if any.
    #[must_use]
    pub fn cash_flow_tag(&self, name: &str) -> Option<&CashFlowTag> {
        self.get(name).and_then(|a| a.cash_flow.as_ref())
    }

    /// Categories of one activity bucket, ordered by first appearance.
    #[must_use]
    pub fn cash_flow_categories(&self, activity: CashFlowActivity) -> Vec<CashFlowCategoryDef<'_>> {
        let mut categories: Vec<CashFlowCategoryDef<'_>> = Vec::new();

        for account in &self.accounts {
            let Some(tag) = &account.cash_flow else {
                continue;
            };
            if tag.activity != activity {
                continue;
            }
            match categories.iter_mut().find(|c| c.label == tag.label) {
                Some(category) => category.accounts.push(account.name.as_str()),
                None => categories.push(CashFlowCategoryDef {
                    label: tag.label.as_str(),
                    accounts: vec![account.name.as_str()],
                }),
            }
        }

        categories
    }
}
