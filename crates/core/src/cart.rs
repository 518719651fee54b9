//! Shopping cart.
//!
//! A cart is an ordered list of lines. Lines are keyed by [`CartItemId`] and
//! two invariants always hold for a cart built through this API:
//!
//! - no two lines share an ID
//! - every line has a quantity of at least 1
//!
//! The cart is stored in the visitor session as JSON, so a stored blob may
//! predate these rules or have been edited by hand; [`Cart::normalized`]
//! restores them after decoding.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ProductOption};
use crate::types::{CartItemId, CurrencyCode, Price, parse_amount};

/// One line of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub name: String,
    /// Option name when an option was chosen, otherwise the product description.
    pub description: String,
    /// Unit price string as shown in the catalog (e.g. `"320 ₽"`).
    pub price: String,
    pub image: String,
    pub quantity: u32,
}

impl CartItem {
    /// Build a quantity-1 line for a product and optional option.
    #[must_use]
    pub fn new(product: &Product, option: Option<&ProductOption>) -> Self {
        Self {
            id: CartItemId::new(&product.name, option.map(|o| o.name.as_str())),
            name: product.name.clone(),
            description: option.map_or_else(|| product.description.clone(), |o| o.name.clone()),
            price: option.map_or_else(|| product.price.clone(), |o| o.price.clone()),
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Unit price as a number.
    #[must_use]
    pub fn unit_amount(&self) -> Decimal {
        parse_amount(&self.price)
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        Price::new(
            self.unit_amount().saturating_mul(Decimal::from(self.quantity)),
            CurrencyCode::RUB,
        )
    }
}

/// Ordered list of cart lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of a product, merging with an existing line.
    ///
    /// Returns the resulting quantity of the affected line.
    pub fn add(&mut self, product: &Product, option: Option<&ProductOption>) -> u32 {
        let item = CartItem::new(product, option);

        if let Some(existing) = self.items.iter_mut().find(|line| line.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            existing.quantity
        } else {
            self.items.push(item);
            1
        }
    }

    /// Remove a line. Unknown IDs are ignored.
    ///
    /// Returns whether a line was removed.
    pub fn remove(&mut self, id: &CartItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|line| &line.id != id);
        self.items.len() != before
    }

    /// Set the quantity of a line.
    ///
    /// A quantity of zero or less removes the line. Unknown IDs are ignored.
    /// Returns whether the cart changed.
    pub fn update_quantity(&mut self, id: &CartItemId, quantity: i64) -> bool {
        let Some(line) = self.items.iter_mut().find(|line| &line.id == id) else {
            return false;
        };

        if quantity <= 0 {
            return self.remove(id);
        }

        line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        true
    }

    /// Sum of every line's unit price times its quantity.
    #[must_use]
    pub fn total(&self) -> Price {
        let amount: Decimal = self
            .items
            .iter()
            .map(|line| line.line_total().amount)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        Price::new(amount, CurrencyCode::RUB)
    }

    /// Number of distinct lines (what the cart badge shows).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: &CartItemId) -> Option<&CartItem> {
        self.items.iter().find(|line| &line.id == id)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Restore the cart invariants on a decoded cart.
    ///
    /// Lines with a zero quantity are dropped and lines sharing an ID are
    /// merged into the first occurrence, keeping order.
    #[must_use]
    pub fn normalized(self) -> Self {
        let mut items: Vec<CartItem> = Vec::with_capacity(self.items.len());

        for line in self.items.into_iter().filter(|line| line.quantity > 0) {
            if let Some(existing) = items.iter_mut().find(|kept| kept.id == line.id) {
                existing.quantity = existing.quantity.saturating_add(line.quantity);
            } else {
                items.push(line);
            }
        }

        Self { items }
    }
}
