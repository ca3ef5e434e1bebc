//! Catalog construction errors.

use thiserror::Error;

use super::types::CashFlowActivity;

/// Errors raised when a catalog definition is malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The same account name is defined twice.
    #[error("Account defined more than once: {0}")]
    DuplicateAccount(String),

    /// A cash-flow label is used in two different activity buckets.
    #[error("Cash-flow label '{label}' used in both {first:?} and {second:?}")]
    LabelSpansActivities {
        /// The offending label.
        label: String,
        /// Activity of the first account using the label.
        first: CashFlowActivity,
        /// Activity of the conflicting account.
        second: CashFlowActivity,
    },

    /// No account carries the inventory role.
    #[error("Catalog has no inventory account")]
    MissingInventoryAccount,

    /// More than one account carries the inventory role.
    #[error("Catalog has more than one inventory account: {0} and {1}")]
    MultipleInventoryAccounts(String, String),

    /// No account is marked as a cash equivalent.
    #[error("Catalog has no cash-equivalent account")]
    NoCashAccounts,
}

impl CatalogError {
    /// Returns the error code for structured output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateAccount(_) => "DUPLICATE_ACCOUNT",
            Self::LabelSpansActivities { .. } => "LABEL_SPANS_ACTIVITIES",
            Self::MissingInventoryAccount => "MISSING_INVENTORY_ACCOUNT",
            Self::MultipleInventoryAccounts(..) => "MULTIPLE_INVENTORY_ACCOUNTS",
            Self::NoCashAccounts => "NO_CASH_ACCOUNTS",
        }
    }
}

impl From<CatalogError> for farmbook_shared::AppError {
    fn from(err: CatalogError) -> Self {
        Self::Configuration(err.to_string())
    }
}
