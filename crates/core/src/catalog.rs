//! Menu catalog: branches → categories → products.
//!
//! The catalog is the `products.json` document the storefront serves from.
//! Nested lists are optional in the document; a branch without categories or a
//! category without products is valid and renders as an empty section.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{BranchIndex, CategoryIndex, OptionIndex, ProductIndex};

/// Errors that can occur when reading a catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document is not valid catalog JSON.
    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document file is not valid catalog JSON.
    #[error("failed to parse {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The whole menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub branches: Vec<Branch>,
}

/// A restaurant location with its own menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
}

/// A menu section such as "Шаурма" or "Напитки".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Logo URL, used verbatim as the image source.
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub products: Option<Vec<Product>>,
}

/// A sellable dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Image file name, served from the assets directory.
    #[serde(default)]
    pub image: String,
    /// Base price string, e.g. `"250 ₽"`.
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub options: Option<Vec<ProductOption>>,
}

/// A size or variant of a product with its own price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    pub name: String,
    pub price: String,
}

/// Counts reported by `lavash-cli catalog check`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub branches: usize,
    pub categories: usize,
    pub products: usize,
    pub products_with_options: usize,
    /// `"branch / category / product"` paths whose price has no digits.
    pub unpriced: Vec<String>,
}

impl Catalog {
    /// Parse a catalog from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the text is not a valid catalog.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a catalog document from disk.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Read` if the file cannot be read, or
    /// `CatalogError::Invalid` if it is not a valid catalog.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| CatalogError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Whether there is anything to show on the branch selection page.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    #[must_use]
    pub fn branch(&self, branch: BranchIndex) -> Option<&Branch> {
        self.branches.get(branch.get())
    }

    #[must_use]
    pub fn category(&self, branch: BranchIndex, category: CategoryIndex) -> Option<&Category> {
        self.branch(branch)?.categories().get(category.get())
    }

    #[must_use]
    pub fn product(
        &self,
        branch: BranchIndex,
        category: CategoryIndex,
        product: ProductIndex,
    ) -> Option<&Product> {
        self.category(branch, category)?
            .products()
            .get(product.get())
    }

    /// Walk the tree and count what is in it.
    #[must_use]
    pub fn summary(&self) -> CatalogSummary {
        let mut summary = CatalogSummary {
            branches: self.branches.len(),
            ..CatalogSummary::default()
        };

        for branch in &self.branches {
            for category in branch.categories() {
                summary.categories += 1;
                for product in category.products() {
                    summary.products += 1;
                    if product.has_options() {
                        summary.products_with_options += 1;
                    }
                    if !product.is_priced() {
                        summary.unpriced.push(format!(
                            "{} / {} / {}",
                            branch.name, category.name, product.name
                        ));
                    }
                }
            }
        }

        summary
    }
}

impl Branch {
    /// Categories of this branch; empty when the document has none.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        self.categories.as_deref().unwrap_or_default()
    }
}

impl Category {
    /// Products of this category; empty when the document has none.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        self.products.as_deref().unwrap_or_default()
    }
}

impl Product {
    /// Options of this product; empty when the document has none.
    #[must_use]
    pub fn options(&self) -> &[ProductOption] {
        self.options.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn has_options(&self) -> bool {
        !self.options().is_empty()
    }

    /// Whether the product is shown as a list of options rather than one price.
    #[must_use]
    pub fn has_multiple_options(&self) -> bool {
        self.options().len() > 1
    }

    /// Option added by the plain "add to cart" button.
    ///
    /// Products offering several options add the first one. A product with a
    /// single option, or none, is added at its base price.
    #[must_use]
    pub fn default_option(&self) -> Option<&ProductOption> {
        if self.has_multiple_options() {
            self.options().first()
        } else {
            None
        }
    }

    /// An explicitly chosen option.
    #[must_use]
    pub fn option(&self, option: OptionIndex) -> Option<&ProductOption> {
        self.options().get(option.get())
    }

    /// Price shown on the default add-to-cart button.
    #[must_use]
    pub fn display_price(&self) -> &str {
        self.default_option()
            .map_or(self.price.as_str(), |option| option.price.as_str())
    }

    /// Whether every price a shopper can add carries an amount.
    fn is_priced(&self) -> bool {
        let has_digits = |price: &str| price.chars().any(|c| c.is_ascii_digit());
        if self.has_multiple_options() {
            self.options().iter().all(|option| has_digits(&option.price))
        } else {
            has_digits(&self.price)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const MENU: &str = r#"{
        "branches": [
            {
                "name": "Центр",
                "address": "ул. Ленина, 1",
                "phone": "+7 900 000-00-00",
                "categories": [
                    {
                        "name": "Шаурма",
                        "logo": "img/shawarma.png",
                        "products": [
                            {
                                "name": "Классическая",
                                "description": "Курица, овощи, соус",
                                "image": "classic.jpg",
                                "price": "250 ₽",
                                "options": [
                                    { "name": "Средняя", "price": "250 ₽" },
                                    { "name": "Большая", "price": "320 ₽" }
                                ]
                            },
                            {
                                "name": "Сырная",
                                "description": "С сыром",
                                "image": "cheese.jpg",
                                "price": "290 ₽",
                                "options": [{ "name": "Стандарт", "price": "300 ₽" }]
                            },
                            {
                                "name": "Морс",
                                "image": "mors.jpg",
                                "price": "по запросу"
                            }
                        ]
                    },
                    { "name": "Напитки", "logo": "img/drinks.png" }
                ]
            },
            { "name": "Север", "address": "пр. Мира, 10", "phone": "+7 900 111-11-11" }
        ]
    }"#;

    fn catalog() -> Catalog {
        Catalog::from_json(MENU).unwrap()
    }

    #[test]
    fn test_parse_menu_with_missing_lists() {
        let catalog = catalog();
        assert_eq!(catalog.branches.len(), 2);
        assert!(catalog.branches[1].categories.is_none());
        assert!(catalog.branches[1].categories().is_empty());
        assert!(catalog.branches[0].categories()[1].products().is_empty());
    }

    #[test]
    fn test_missing_branches_is_empty_catalog() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_invalid_document_is_parse_error() {
        let err = Catalog::from_json("{\"branches\": 5}").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_from_path_reports_the_file() {
        let missing = Path::new("/nonexistent/products.json");
        let err = Catalog::from_path(missing).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/products.json"));

        let path = std::env::temp_dir().join(format!(
            "lavash-core-catalog-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "not json").unwrap();
        let err = Catalog::from_path(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid { .. }));

        std::fs::write(&path, MENU).unwrap();
        let catalog = Catalog::from_path(&path).unwrap();
        assert_eq!(catalog.branches.len(), 2);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_lookup_by_index() {
        let catalog = catalog();
        let (b, c, p) = (BranchIndex::new(0), CategoryIndex::new(0), ProductIndex::new(1));

        assert_eq!(catalog.branch(b).unwrap().name, "Центр");
        assert_eq!(catalog.category(b, c).unwrap().name, "Шаурма");
        assert_eq!(catalog.product(b, c, p).unwrap().name, "Сырная");
        assert!(catalog.product(b, c, ProductIndex::new(9)).is_none());
        assert!(catalog.category(BranchIndex::new(1), c).is_none());
        assert!(catalog.branch(BranchIndex::new(5)).is_none());
    }

    #[test]
    fn test_default_option_only_for_multi_option_products() {
        let catalog = catalog();
        let products = catalog.branches[0].categories()[0].products();

        assert_eq!(products[0].default_option().unwrap().name, "Средняя");
        assert_eq!(products[0].display_price(), "250 ₽");
        assert!(products[1].default_option().is_none());
        assert_eq!(products[1].display_price(), "290 ₽");
        assert!(products[2].default_option().is_none());
    }

    #[test]
    fn test_explicit_option_choice() {
        let catalog = catalog();
        let product = &catalog.branches[0].categories()[0].products()[0];

        assert_eq!(product.option(OptionIndex::new(1)).unwrap().price, "320 ₽");
        assert!(product.option(OptionIndex::new(2)).is_none());
    }

    #[test]
    fn test_summary_counts_and_flags_unpriced() {
        let summary = catalog().summary();

        assert_eq!(summary.branches, 2);
        assert_eq!(summary.categories, 2);
        assert_eq!(summary.products, 3);
        assert_eq!(summary.products_with_options, 2);
        assert_eq!(summary.unpriced, vec!["Центр / Шаурма / Морс".to_string()]);
    }
}
