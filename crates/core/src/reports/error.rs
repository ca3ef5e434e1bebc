//! Report error types.

use chrono::NaiveDate;
use farmbook_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors and empty states of report generation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReportError {
    /// Range start is after range end.
    #[error("Invalid date range: start {from} is after end {to}")]
    InvalidDateRange {
        /// Start date.
        from: NaiveDate,
        /// End date.
        to: NaiveDate,
    },

    /// The journal holds no entries.
    #[error("No journal entries recorded yet")]
    NoData,

    /// The account has no movements in the range.
    #[error("No movements for account {account} in the selected period")]
    NoMovement {
        /// Account name.
        account: String,
    },
}

impl ReportError {
    /// Returns the error code for structured output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
            Self::NoData => "NO_DATA",
            Self::NoMovement { .. } => "NO_MOVEMENT",
        }
    }

    /// Returns true for reportable empty states that are not failures.
    #[must_use]
    pub fn is_empty_state(&self) -> bool {
        matches!(self, Self::NoData | Self::NoMovement { .. })
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::InvalidDateRange { .. } => Self::Validation(err.to_string()),
            ReportError::NoData | ReportError::NoMovement { .. } => Self::NotFound(err.to_string()),
        }
    }
}

/// Internally validated data that fails a bookkeeping identity.
///
/// Signals corrupted data or a logic bug. Never auto-corrected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntegrityError {
    /// Trial balance debit and credit totals disagree.
    #[error("Trial balance is not balanced. Debit: {total_debit}, Credit: {total_credit}")]
    TrialBalanceUnbalanced {
        /// Total of the debit column.
        total_debit: Decimal,
        /// Total of the credit column.
        total_credit: Decimal,
    },

    /// Activity totals disagree with the change in cash balances.
    #[error("Cash-flow activities total {activities} but cash balances changed by {direct}")]
    CashFlowMismatch {
        /// Operating + investing + financing.
        activities: Decimal,
        /// Ending cash minus beginning cash.
        direct: Decimal,
    },
}

impl IntegrityError {
    /// Returns the error code for structured output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::TrialBalanceUnbalanced { .. } => "TRIAL_BALANCE_UNBALANCED",
            Self::CashFlowMismatch { .. } => "CASH_FLOW_MISMATCH",
        }
    }
}

impl From<IntegrityError> for AppError {
    fn from(err: IntegrityError) -> Self {
        Self::Integrity(err.to_string())
    }
}
