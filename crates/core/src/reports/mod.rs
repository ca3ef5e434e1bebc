//! Financial report generation.
//!
//! Every report is a pure function of the journal, the account catalog and
//! an inclusive date range:
//! - Account Ledger
//! - Trial Balance
//! - Income Statement
//! - Cash-Flow Statement

pub mod error;
pub mod range;
pub mod service;
pub mod types;

mod cash_flow;
mod income_statement;
mod ledger;
mod trial_balance;

#[cfg(test)]
mod tests;

pub use error::{IntegrityError, ReportError};
pub use range::DateRange;
pub use service::ReportService;
pub use types::*;
