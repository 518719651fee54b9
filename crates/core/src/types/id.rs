//! Newtype identifiers for type-safe catalog and cart references.
//!
//! Catalog entries are addressed by their position in `products.json`, so the
//! index types wrap `usize`. Use the `define_index!` macro to create them; they
//! prevent accidentally passing a category index where a branch is expected.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Macro to define a type-safe catalog index wrapper.
///
/// Creates a newtype wrapper around `usize` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `get()`
/// - `From<usize>` and `Into<usize>` implementations
///
/// # Example
///
/// ```rust
/// # use lavash_core::define_index;
/// define_index!(ShelfIndex);
/// define_index!(RowIndex);
///
/// let shelf = ShelfIndex::new(1);
/// let row = RowIndex::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: ShelfIndex = row;
/// # let _ = (shelf, row);
/// ```
#[macro_export]
macro_rules! define_index {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Create a new index from a `usize` position.
            #[must_use]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the underlying position.
            #[must_use]
            pub const fn get(&self) -> usize {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<usize> for $name {
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            fn from(index: $name) -> Self {
                index.0
            }
        }
    };
}

define_index!(BranchIndex);
define_index!(CategoryIndex);
define_index!(ProductIndex);
define_index!(OptionIndex);

/// Option segment used in a cart item ID when no option was chosen.
pub const DEFAULT_OPTION_SEGMENT: &str = "default";

/// Identifier of a cart line.
///
/// Built from the product name and the chosen option name, so adding the same
/// product/option pair twice lands on the same line:
///
/// ```
/// use lavash_core::CartItemId;
///
/// assert_eq!(CartItemId::new("Шаурма", Some("Большая")).as_str(), "Шаурма-Большая");
/// assert_eq!(CartItemId::new("Шаурма", None).as_str(), "Шаурма-default");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartItemId(String);

impl CartItemId {
    /// Derive the ID for a product and optional option name.
    #[must_use]
    pub fn new(product_name: &str, option_name: Option<&str>) -> Self {
        Self(format!(
            "{product_name}-{}",
            option_name.unwrap_or(DEFAULT_OPTION_SEGMENT)
        ))
    }

    /// Get the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CartItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CartItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for CartItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
