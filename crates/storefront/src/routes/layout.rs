//! Data shared by every full-page template.

use axum::http::HeaderMap;
use tower_sessions::Session;

use crate::models::Flash;
use crate::models::session::{load_cart, load_theme, take_flash};

/// Header chrome: theme, cart badge and the pending notification.
#[derive(Clone)]
pub struct Layout {
    /// Value of `<html data-theme>`.
    pub theme: &'static str,
    /// Icon class of the theme toggle.
    pub theme_icon: &'static str,
    /// Number of distinct cart lines.
    pub cart_count: usize,
    pub flash: Option<Flash>,
    /// Path the theme toggle returns to.
    pub current_path: String,
}

impl Layout {
    /// Read the chrome from the session, consuming any queued flash.
    pub async fn load(session: &Session, current_path: impl Into<String>) -> Self {
        let theme = load_theme(session).await;
        let cart = load_cart(session).await;

        Self {
            theme: theme.as_str(),
            theme_icon: theme.icon(),
            cart_count: cart.len(),
            flash: take_flash(session).await,
            current_path: current_path.into(),
        }
    }
}

/// Whether the request was issued by HTMX and expects a fragment.
#[must_use]
pub fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get("hx-request")
        .is_some_and(|value| value.as_bytes() == b"true")
}

/// Accept only local absolute paths as redirect targets.
#[must_use]
pub fn safe_return_path(candidate: Option<&str>) -> &str {
    match candidate {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path
        }
        _ => "/",
    }
}
