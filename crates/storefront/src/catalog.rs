//! Loading the menu document from disk.

use std::path::Path;

use lavash_core::{Catalog, CatalogError};

/// Read and parse the menu document.
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read or is not a valid
/// catalog.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let catalog = Catalog::from_path(path)?;

    tracing::info!(
        path = %path.display(),
        branches = catalog.branches.len(),
        "Catalog loaded"
    );
    Ok(catalog)
}
