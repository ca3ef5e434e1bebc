//! Core bookkeeping logic for Farmbook.
//!
//! This crate contains pure business logic with ZERO storage or presentation
//! dependencies. Durable storage is reached through `JournalRepository` and
//! the current date through `Clock`.
//!
//! # Modules
//!
//! - `catalog` - Chart of accounts and classification tags
//! - `journal` - Double-entry journal: validation, store, service
//! - `reports` - Ledger, trial balance, income statement, cash flow

pub mod catalog;
pub mod journal;
pub mod reports;
