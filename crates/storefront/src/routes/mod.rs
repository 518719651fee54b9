//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                                 - Restore last position (redirect)
//! GET  /health                           - Health check
//!
//! # Menu
//! GET  /branches                         - Branch selection
//! GET  /branches/{b}                     - Categories of a branch
//! GET  /branches/{b}/categories/{c}      - Products of a category
//!
//! # Cart (plain forms or HTMX fragments)
//! GET  /cart                             - Cart page
//! POST /cart/add                         - Add to cart (redirect, or badge fragment)
//! POST /cart/update                      - Update quantity (redirect, or cart_items fragment)
//! POST /cart/remove                      - Remove item (redirect, or cart_items fragment)
//! GET  /cart/count                       - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout                         - Checkout form
//! POST /checkout                         - Submit order
//!
//! # Preferences
//! POST /theme/toggle                     - Switch light/dark theme
//! ```

pub mod cart;
pub mod checkout;
pub mod layout;
pub mod menu;
pub mod theme;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the menu routes router.
pub fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(menu::branches))
        .route("/{branch}", get(menu::categories))
        .route("/{branch}/categories/{category}", get(menu::products))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Entry point restores the saved position
        .route("/", get(menu::restore))
        // Menu routes
        .nest("/branches", menu_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout
        .route("/checkout", get(checkout::show).post(checkout::submit))
        // Preferences
        .route("/theme/toggle", post(theme::toggle))
}
