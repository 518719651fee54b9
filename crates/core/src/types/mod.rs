//! Core value types for the Lavash storefront.
//!
//! This module provides type-safe wrappers for catalog positions, cart line
//! identifiers, and prices.

pub mod id;
pub mod price;

pub use id::*;
pub use price::{CurrencyCode, Price, format_price, parse_amount};
