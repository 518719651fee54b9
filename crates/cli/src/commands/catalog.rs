//! Menu document commands.
//!
//! # Usage
//!
//! ```bash
//! lavash-cli catalog check products.json
//! ```

use std::path::{Path, PathBuf};

use lavash_core::{Catalog, CatalogError, CatalogSummary};
use thiserror::Error;

/// Errors that can occur while checking a menu document.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The file could not be read or is not a valid menu document.
    #[error(transparent)]
    Load(#[from] CatalogError),

    /// Strict mode found products without a usable price.
    #[error("{0} product(s) without a usable price")]
    Unpriced(usize),

    /// The document parsed but lists no branches.
    #[error("Menu in {0} has no branches")]
    Empty(PathBuf),
}

/// Validate the menu document at `path` and print its summary.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, has no branches,
/// or (with `strict`) contains products without a usable price.
pub fn check(path: &Path, strict: bool) -> Result<(), CheckError> {
    let summary = summarize(path)?;

    #[allow(clippy::print_stdout)]
    {
        println!("Menu: {}", path.display());
        println!("  Branches:             {}", summary.branches);
        println!("  Categories:           {}", summary.categories);
        println!("  Products:             {}", summary.products);
        println!("  Products with options: {}", summary.products_with_options);
        println!("  Unpriced products:    {}", summary.unpriced.len());
    }

    for product in &summary.unpriced {
        tracing::warn!(product = %product, "Price has no amount");
    }

    if strict && !summary.unpriced.is_empty() {
        return Err(CheckError::Unpriced(summary.unpriced.len()));
    }

    Ok(())
}

/// Load and summarize a menu document.
fn summarize(path: &Path) -> Result<CatalogSummary, CheckError> {
    let catalog = Catalog::from_path(path)?;

    if catalog.is_empty() {
        return Err(CheckError::Empty(path.to_path_buf()));
    }

    Ok(catalog.summary())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn write_temp(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("lavash-cli-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    const MENU: &str = r#"{"branches": [{"name": "Центр", "address": "", "phone": "",
        "categories": [{"name": "Шаурма", "logo": "", "products": [
            {"name": "Классика", "description": "", "image": "", "price": "250 ₽"},
            {"name": "Сезонная", "description": "", "image": "", "price": "по запросу"}
        ]}]}]}"#;

    #[test]
    fn test_check_reports_unpriced_only_in_strict_mode() {
        let path = write_temp(MENU);

        assert!(check(&path, false).is_ok());
        assert!(matches!(check(&path, true), Err(CheckError::Unpriced(1))));

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_summarize_counts() {
        let path = write_temp(MENU);
        let summary = summarize(&path).unwrap();

        assert_eq!(summary.branches, 1);
        assert_eq!(summary.categories, 1);
        assert_eq!(summary.products, 2);
        assert_eq!(summary.unpriced, vec!["Центр / Шаурма / Сезонная".to_string()]);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_check_rejects_invalid_documents() {
        let path = write_temp("{ not json");
        assert!(matches!(
            check(&path, false),
            Err(CheckError::Load(CatalogError::Invalid { .. }))
        ));
        std::fs::remove_file(path).unwrap();

        let path = write_temp(r#"{"branches": []}"#);
        assert!(matches!(check(&path, false), Err(CheckError::Empty(_))));
        std::fs::remove_file(path).unwrap();

        let missing = std::env::temp_dir().join("lavash-cli-missing.json");
        assert!(matches!(
            check(&missing, false),
            Err(CheckError::Load(CatalogError::Read { .. }))
        ));
    }
}
