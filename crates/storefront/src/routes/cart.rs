//! Cart route handlers.
//!
//! The cart lives in the session. Mutations accept plain form posts (answered
//! with a redirect) and HTMX requests (answered with a fragment and an
//! `HX-Trigger: cart-updated` header so the badge can refresh).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use lavash_core::{
    BranchIndex, Cart, CartItem, CartItemId, CategoryIndex, OptionIndex, ProductIndex, View,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::models::Flash;
use crate::models::session::{load_cart, save_cart, set_flash};
use crate::routes::layout::{Layout, is_htmx};
use crate::state::AppState;

/// Notification shown after a successful add.
pub const ADDED_TO_CART: &str = "Товар добавлен в корзину";

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub quantity: u32,
    /// Quantity submitted by the minus button (0 removes the line).
    pub decrement: i64,
    /// Quantity submitted by the plus button.
    pub increment: i64,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub count: usize,
}

impl CartView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        let quantity = i64::from(item.quantity);
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.clone(),
            image: item.image.clone(),
            quantity: item.quantity,
            decrement: quantity - 1,
            increment: quantity + 1,
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            total: cart.total().display(),
            count: cart.len(),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub branch: usize,
    pub category: usize,
    pub product: usize,
    /// Explicit option; the product's default option is used when absent.
    pub option: Option<usize>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub id: String,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub id: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub layout: Layout,
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Badge fragment plus an out-of-band notification (for HTMX adds).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_added.html")]
pub struct CartAddedTemplate {
    pub count: usize,
    pub flash: Flash,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: usize,
}

/// Display cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;

    CartShowTemplate {
        layout: Layout::load(&session, "/cart").await,
        cart: CartView::from(&cart),
    }
}

/// Add one unit of a product to the cart.
///
/// Plain posts queue the notification as a flash for the next page; HTMX
/// requests get it out of band next to the badge count.
#[instrument(skip(state, session, headers))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let branch = BranchIndex::new(form.branch);
    let category = CategoryIndex::new(form.category);
    let product = state
        .catalog()
        .product(branch, category, ProductIndex::new(form.product))
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "product {} of category {category} of branch {branch}",
                form.product
            ))
        })?;

    let option = match form.option {
        Some(index) => Some(
            product
                .option(OptionIndex::new(index))
                .ok_or_else(|| AppError::BadRequest(format!("unknown option {index}")))?,
        ),
        None => product.default_option(),
    };

    let mut cart = load_cart(&session).await;
    let quantity = cart.add(product, option);
    save_cart(&session, &cart).await?;

    let item_id = CartItemId::new(&product.name, option.map(|o| o.name.as_str()));
    tracing::info!(item_id = %item_id, quantity, "Added to cart");
    add_breadcrumb(
        "cart",
        "Added item",
        Some([("item_id", item_id.as_str())].as_slice()),
    );

    if is_htmx(&headers) {
        return Ok((
            AppendHeaders([("HX-Trigger", "cart-updated")]),
            CartAddedTemplate {
                count: cart.len(),
                flash: Flash::success(ADDED_TO_CART),
            },
        )
            .into_response());
    }

    set_flash(&session, Flash::success(ADDED_TO_CART)).await?;
    Ok(Redirect::to(&View::Products(branch, category).path()).into_response())
}

/// Set the quantity of a cart line; zero or less removes it.
#[instrument(skip(session, headers))]
pub async fn update(
    session: Session,
    headers: HeaderMap,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    let mut cart = load_cart(&session).await;
    let id = CartItemId::from(form.id);

    if cart.update_quantity(&id, form.quantity) {
        save_cart(&session, &cart).await?;
        tracing::info!(item_id = %id, quantity = form.quantity, "Updated cart quantity");
    }

    Ok(cart_response(&headers, &cart))
}

/// Remove a cart line.
#[instrument(skip(session, headers))]
pub async fn remove(
    session: Session,
    headers: HeaderMap,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let mut cart = load_cart(&session).await;
    let id = CartItemId::from(form.id);

    if cart.remove(&id) {
        save_cart(&session, &cart).await?;
        tracing::info!(item_id = %id, "Removed from cart");
    }

    Ok(cart_response(&headers, &cart))
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    CartCountTemplate {
        count: load_cart(&session).await.len(),
    }
}

/// Answer a cart mutation: a fragment for HTMX, otherwise back to the cart page.
fn cart_response(headers: &HeaderMap, cart: &Cart) -> Response {
    if is_htmx(headers) {
        (
            AppendHeaders([("HX-Trigger", "cart-updated")]),
            CartItemsTemplate {
                cart: CartView::from(cart),
            },
        )
            .into_response()
    } else {
        Redirect::to("/cart").into_response()
    }
}
