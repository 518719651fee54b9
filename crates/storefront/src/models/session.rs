//! Visitor state kept in the session.
//!
//! Everything a visitor accumulates lives under a handful of session keys:
//! the cart, the last browsing position, the colour theme and a one-shot
//! flash message. A value that fails to decode is logged and replaced by its
//! default so a stale or hand-edited session never breaks a page.

use lavash_core::{Cart, NavigationState, Theme};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tower_sessions::Session;
use tower_sessions::session::Error as SessionError;

/// Session keys for visitor data.
pub mod keys {
    /// Key for the cart blob.
    pub const CART: &str = "lavash_cart";

    /// Key for the last visited branch/category.
    pub const NAVIGATION: &str = "lavash_navigation";

    /// Key for the colour theme.
    pub const THEME: &str = "theme";

    /// Key for the one-shot notification.
    pub const FLASH: &str = "flash";
}

/// Flavour of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    /// CSS modifier class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A notification shown once on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

/// Read a value, treating undecodable data as absent.
async fn get_or_default<T>(session: &Session, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match session.get::<T>(key).await {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            tracing::error!(key, error = %e, "Failed to load session value, using default");
            T::default()
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// Load the cart, repairing invariant violations in the stored blob.
pub async fn load_cart(session: &Session) -> Cart {
    get_or_default::<Cart>(session, keys::CART).await.normalized()
}

/// Persist the cart.
///
/// # Errors
///
/// Returns an error if the session store rejects the write.
pub async fn save_cart(session: &Session, cart: &Cart) -> Result<(), SessionError> {
    session.insert(keys::CART, cart).await
}

/// Drop the cart from the session.
///
/// # Errors
///
/// Returns an error if the session store rejects the write.
pub async fn clear_cart(session: &Session) -> Result<(), SessionError> {
    session.remove_value(keys::CART).await.map(|_| ())
}

// =============================================================================
// Navigation
// =============================================================================

/// Load the last browsing position.
pub async fn load_navigation(session: &Session) -> NavigationState {
    get_or_default(session, keys::NAVIGATION).await
}

/// Persist the browsing position.
///
/// # Errors
///
/// Returns an error if the session store rejects the write.
pub async fn save_navigation(
    session: &Session,
    navigation: &NavigationState,
) -> Result<(), SessionError> {
    session.insert(keys::NAVIGATION, navigation).await
}

/// Forget the browsing position.
///
/// # Errors
///
/// Returns an error if the session store rejects the write.
pub async fn clear_navigation(session: &Session) -> Result<(), SessionError> {
    session.remove_value(keys::NAVIGATION).await.map(|_| ())
}

// =============================================================================
// Theme
// =============================================================================

/// Load the colour theme (light when unset).
pub async fn load_theme(session: &Session) -> Theme {
    get_or_default(session, keys::THEME).await
}

/// Persist the colour theme.
///
/// # Errors
///
/// Returns an error if the session store rejects the write.
pub async fn save_theme(session: &Session, theme: Theme) -> Result<(), SessionError> {
    session.insert(keys::THEME, theme).await
}

// =============================================================================
// Flash
// =============================================================================

/// Queue a notification for the next rendered page.
///
/// # Errors
///
/// Returns an error if the session store rejects the write.
pub async fn set_flash(session: &Session, flash: Flash) -> Result<(), SessionError> {
    session.insert(keys::FLASH, flash).await
}

/// Take the queued notification, if any.
pub async fn take_flash(session: &Session) -> Option<Flash> {
    match session.remove::<Flash>(keys::FLASH).await {
        Ok(flash) => flash,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read flash message");
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use lavash_core::{BranchIndex, Product, Snapshot};
    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    fn product() -> Product {
        Product {
            name: "Лаваш".to_string(),
            description: "Свежий".to_string(),
            image: "lavash.jpg".to_string(),
            price: "60 ₽".to_string(),
            options: None,
        }
    }

    #[tokio::test]
    async fn test_cart_round_trip() {
        let session = session();
        let mut cart = Cart::new();
        cart.add(&product(), None);

        save_cart(&session, &cart).await.unwrap();
        assert_eq!(load_cart(&session).await, cart);

        clear_cart(&session).await.unwrap();
        assert!(load_cart(&session).await.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_cart_blob_loads_empty() {
        let session = session();
        session.insert(keys::CART, "not a cart").await.unwrap();
        assert!(load_cart(&session).await.is_empty());
    }

    #[tokio::test]
    async fn test_theme_defaults_to_light() {
        let session = session();
        assert_eq!(load_theme(&session).await, Theme::Light);

        save_theme(&session, Theme::Dark).await.unwrap();
        assert_eq!(load_theme(&session).await, Theme::Dark);
    }

    #[tokio::test]
    async fn test_navigation_round_trip() {
        let session = session();
        let navigation = NavigationState {
            current_branch: Some(Snapshot {
                index: BranchIndex::new(1),
                name: "Север".to_string(),
            }),
            current_category: None,
        };

        save_navigation(&session, &navigation).await.unwrap();
        assert_eq!(load_navigation(&session).await, navigation);

        clear_navigation(&session).await.unwrap();
        assert_eq!(load_navigation(&session).await, NavigationState::default());
    }

    #[tokio::test]
    async fn test_flash_is_taken_once() {
        let session = session();
        set_flash(&session, Flash::success("Товар добавлен в корзину"))
            .await
            .unwrap();

        let flash = take_flash(&session).await.unwrap();
        assert_eq!(flash.kind, FlashKind::Success);
        assert!(take_flash(&session).await.is_none());
    }
}
