//! Checkout form and the order record it produces.
//!
//! Orders are not persisted anywhere: the storefront logs the record and shows
//! a confirmation. Building one still enforces what the checkout form needs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::{Cart, CartItem};
use crate::catalog::Branch;

/// Errors that can occur when building an [`Order`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// There is nothing to order.
    #[error("Корзина пуста")]
    EmptyCart,
    /// A required form field is blank.
    #[error("Заполните поле: {0}")]
    MissingField(&'static str),
}

/// Submitted checkout form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub notes: String,
}

/// Contact and delivery details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// A submitted order.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub customer: Customer,
    pub notes: String,
    pub items: Vec<CartItem>,
    /// Whole-ruble total, logged as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    /// Branch the visitor was browsing, if any.
    pub branch: Option<Branch>,
    pub timestamp: DateTime<Utc>,
}

impl Order {
    /// Validate the form against the cart and assemble the order.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::EmptyCart` if the cart has no lines, or
    /// `OrderError::MissingField` if name, phone or address is blank.
    pub fn build(
        form: CheckoutForm,
        cart: &Cart,
        branch: Option<&Branch>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let name = required(form.name, "Имя")?;
        let phone = required(form.phone, "Телефон")?;
        let address = required(form.address, "Адрес")?;

        Ok(Self {
            customer: Customer {
                name,
                phone,
                address,
            },
            notes: form.notes.trim().to_string(),
            items: cart.items().to_vec(),
            total: cart.total().amount,
            branch: branch.cloned(),
            timestamp,
        })
    }
}

fn required(value: String, field: &'static str) -> Result<String, OrderError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(OrderError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn cart() -> Cart {
        let mut cart = Cart::new();
        let product = Product {
            name: "Лаваш".to_string(),
            description: "Свежий".to_string(),
            image: "lavash.jpg".to_string(),
            price: "60 ₽".to_string(),
            options: None,
        };
        cart.add(&product, None);
        cart.add(&product, None);
        cart
    }

    fn branch() -> Branch {
        Branch {
            name: "Центр".to_string(),
            address: "ул. Ленина, 1".to_string(),
            phone: "+7 900 000-00-00".to_string(),
            categories: None,
        }
    }

    fn form() -> CheckoutForm {
        CheckoutForm {
            name: "  Анна ".to_string(),
            phone: "+7 900 123-45-67".to_string(),
            address: "ул. Садовая, 5".to_string(),
            notes: "Без лука".to_string(),
        }
    }

    #[test]
    fn test_build_order() {
        let now = Utc::now();
        let branch = branch();
        let order = Order::build(form(), &cart(), Some(&branch), now).unwrap();

        assert_eq!(order.customer.name, "Анна");
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.total, Decimal::from(120));
        assert_eq!(order.branch.as_ref().map(|b| b.name.as_str()), Some("Центр"));
        assert_eq!(order.timestamp, now);
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let err = Order::build(form(), &Cart::new(), None, Utc::now()).unwrap_err();
        assert_eq!(err, OrderError::EmptyCart);
        assert_eq!(err.to_string(), "Корзина пуста");
    }

    #[test]
    fn test_blank_required_field_is_rejected() {
        let mut form = form();
        form.phone = "   ".to_string();
        let err = Order::build(form, &cart(), None, Utc::now()).unwrap_err();
        assert_eq!(err, OrderError::MissingField("Телефон"));
    }

    #[test]
    fn test_notes_are_optional() {
        let mut form = form();
        form.notes = String::new();
        assert!(Order::build(form, &cart(), None, Utc::now()).is_ok());
    }

    #[test]
    fn test_order_serializes_for_logging() {
        let branch = branch();
        let order = Order::build(form(), &cart(), Some(&branch), Utc::now()).unwrap();
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["customer"]["phone"], "+7 900 123-45-67");
        assert_eq!(json["items"][0]["quantity"], 2);
        assert_eq!(json["total"], 120.0);
        assert_eq!(json["branch"]["name"], "Центр");
        assert_eq!(json["branch"]["address"], "ул. Ленина, 1");
    }
}
