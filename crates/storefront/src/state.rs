//! Application state shared across handlers.

use std::sync::Arc;

use lavash_core::Catalog;

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the menu loaded at startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    catalog_unavailable: bool,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `catalog` - Menu to serve
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                catalog_unavailable: false,
            }),
        }
    }

    /// State for a storefront whose menu failed to load.
    ///
    /// Pages still render; the branch list shows a loading error instead of
    /// branches.
    #[must_use]
    pub fn without_catalog(config: StorefrontConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::default(),
                catalog_unavailable: true,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the menu.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Whether the menu document failed to load at startup.
    #[must_use]
    pub fn catalog_unavailable(&self) -> bool {
        self.inner.catalog_unavailable
    }
}
