//! Lavash Core - Domain types and state logic for the storefront.
//!
//! This crate provides everything a visitor's session is made of:
//! - `storefront` - Server-rendered shop (branches, menu, cart, checkout)
//! - `cli` - Command-line tools for catalog checks and session-store migrations
//!
//! # Architecture
//!
//! The core crate contains only types and pure state transitions - no I/O, no
//! sessions, no HTTP. Callers read `products.json` themselves and hand the text
//! to [`Catalog::from_json`].
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for catalog indices, cart line IDs and prices
//! - [`catalog`] - Branch → category → product tree
//! - [`cart`] - Cart lines, quantities and totals
//! - [`navigation`] - Saved browsing position and view resolution
//! - [`theme`] - Light/dark preference
//! - [`order`] - Checkout form validation and the submitted order record

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod navigation;
pub mod order;
pub mod theme;
pub mod types;

pub use cart::{Cart, CartItem};
pub use catalog::{
    Branch, Catalog, CatalogError, CatalogSummary, Category, Product, ProductOption,
};
pub use navigation::{NavigationState, Snapshot, View};
pub use order::{CheckoutForm, Customer, Order, OrderError};
pub use theme::Theme;
pub use types::*;
