//! Checkout route handlers.
//!
//! Orders are not processed: a valid submission is logged as structured JSON,
//! the cart and saved navigation are cleared, and a confirmation is shown.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use lavash_core::{CheckoutForm, Order, OrderError};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::models::Flash;
use crate::models::session::{
    clear_cart, clear_navigation, load_cart, load_navigation, set_flash,
};
use crate::routes::cart::CartView;
use crate::routes::layout::Layout;
use crate::state::AppState;

/// Checkout form page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub layout: Layout,
    pub cart: CartView,
    pub form: CheckoutForm,
    pub error: Option<String>,
}

/// Order confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/success.html")]
pub struct SuccessTemplate {
    pub layout: Layout,
}

/// Send the visitor back to the cart with an "empty cart" notice.
async fn reject_empty_cart(session: &Session) -> Result<Response> {
    set_flash(session, Flash::error(OrderError::EmptyCart.to_string())).await?;
    Ok(Redirect::to("/cart").into_response())
}

/// Display the checkout form with the order summary.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Response> {
    let cart = load_cart(&session).await;
    if cart.is_empty() {
        return reject_empty_cart(&session).await;
    }

    Ok(CheckoutTemplate {
        layout: Layout::load(&session, "/checkout").await,
        cart: CartView::from(&cart),
        form: CheckoutForm::default(),
        error: None,
    }
    .into_response())
}

/// Submit the order.
#[instrument(skip(state, session, form))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CheckoutForm>,
) -> Result<Response> {
    let cart = load_cart(&session).await;
    let navigation = load_navigation(&session).await;
    let branch = navigation.branch(state.catalog());

    let order = match Order::build(form.clone(), &cart, branch, Utc::now()) {
        Ok(order) => order,
        Err(OrderError::EmptyCart) => return reject_empty_cart(&session).await,
        Err(e @ OrderError::MissingField(_)) => {
            tracing::debug!(error = %e, "Checkout form incomplete");
            let page = CheckoutTemplate {
                layout: Layout::load(&session, "/checkout").await,
                cart: CartView::from(&cart),
                form,
                error: Some(e.to_string()),
            };
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
        }
    };

    let payload =
        serde_json::to_string(&order).map_err(|e| AppError::Internal(e.to_string()))?;
    tracing::info!(
        order = %payload,
        total = %order.total,
        items = order.items.len(),
        "Order submitted"
    );
    add_breadcrumb("checkout", "Order submitted", None);

    clear_cart(&session).await?;
    clear_navigation(&session).await?;

    Ok(SuccessTemplate {
        layout: Layout::load(&session, "/branches").await,
    }
    .into_response())
}
