//! Account catalog files.

use std::path::Path;

use farmbook_core::catalog::{AccountCatalog, CatalogDefinition};
use farmbook_shared::AppResult;

/// Reads and validates a catalog file.
///
/// The format follows the extension (`.toml` or `.json`). The file holds an
/// `accounts` array of account definitions in display order.
///
/// # Errors
///
/// Returns `AppError::Configuration` if the file cannot be read or parsed,
/// or if the definitions break a catalog rule.
pub fn load_catalog(path: &Path) -> AppResult<AccountCatalog> {
    let definition: CatalogDefinition = config::Config::builder()
        .add_source(config::File::from(path))
        .build()?
        .try_deserialize()?;

    let catalog = AccountCatalog::from_definition(definition)?;
    tracing::info!(
        path = %path.display(),
        accounts = catalog.accounts().len(),
        "Account catalog loaded"
    );
    Ok(catalog)
}
