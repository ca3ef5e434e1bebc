//! File storage for the journal and the account catalog.
//!
//! This crate provides:
//! - On-disk record types for the journal file
//! - `JsonFileRepository`, the durable `JournalRepository`
//! - Catalog loading from TOML or JSON files

pub mod entities;
pub mod repositories;

pub use repositories::{JsonFileRepository, load_catalog};
