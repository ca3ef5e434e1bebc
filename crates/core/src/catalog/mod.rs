//! Account catalog.
//!
//! The catalog is static configuration: every recognized account name with its
//! classification tags. It is built once at process start and shared read-only
//! by the journal service and every report, so all reports agree on how an
//! account is classified.

pub mod error;
pub mod farm;
pub mod types;

pub use error::CatalogError;
pub use types::{
    AccountCatalog, AccountDefinition, AccountType, CashFlowActivity, CashFlowCategoryDef,
    CashFlowTag, CatalogDefinition, IncomeRole,
};
