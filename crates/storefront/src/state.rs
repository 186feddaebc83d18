//! Application state shared across handlers.

use std::sync::Arc;

use greenthumb_core::{CartStore, Catalog, Checkout, ComingSoonCheckout};

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It owns the catalog, the single
/// cart store every handler reads from and dispatches to, and the checkout
/// collaborator.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: CartStore,
    checkout: Box<dyn Checkout>,
}

impl AppState {
    /// Create a new application state with an empty cart and the
    /// "Coming Soon" checkout.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self::with_checkout(config, catalog, ComingSoonCheckout)
    }

    /// Create a new application state with a specific checkout collaborator.
    #[must_use]
    pub fn with_checkout(
        config: StorefrontConfig,
        catalog: Catalog,
        checkout: impl Checkout + 'static,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart: CartStore::new(),
                checkout: Box::new(checkout),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    #[must_use]
    pub fn checkout(&self) -> &dyn Checkout {
        self.inner.checkout.as_ref()
    }
}
