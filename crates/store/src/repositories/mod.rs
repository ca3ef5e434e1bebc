//! Repository implementations.

pub mod catalog;
pub mod journal;

pub use catalog::load_catalog;
pub use journal::JsonFileRepository;
