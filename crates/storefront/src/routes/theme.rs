//! Theme toggle.

use axum::{Form, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::models::session::{load_theme, save_theme};
use crate::routes::layout::safe_return_path;

/// Theme toggle form data.
#[derive(Debug, Deserialize)]
pub struct ToggleThemeForm {
    /// Page to return to after toggling.
    pub return_to: Option<String>,
}

/// Flip between light and dark and return to the current page.
#[instrument(skip(session))]
pub async fn toggle(session: Session, Form(form): Form<ToggleThemeForm>) -> Result<Redirect> {
    let theme = load_theme(&session).await.toggle();
    save_theme(&session, theme).await?;
    tracing::debug!(%theme, "Theme toggled");

    Ok(Redirect::to(safe_return_path(form.return_to.as_deref())))
}
