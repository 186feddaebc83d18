//! Checkout collaborator.
//!
//! Checkout is not implemented yet. The storefront shows a checkout button
//! wired to [`ComingSoonCheckout`], which reports that explicitly instead of
//! pretending to succeed. Checkout never mutates the cart.

use serde::Serialize;
use thiserror::Error;

use crate::cart::Cart;
use crate::types::Price;

/// Errors returned by a [`Checkout`] implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("checkout is not implemented yet: {0}")]
    NotImplemented(&'static str),
}

/// Result of a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutReceipt {
    pub total_items: u64,
    pub total_price: Price,
}

/// Turns a cart into an order.
pub trait Checkout: Send + Sync {
    /// Check out the given cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError`] if the cart cannot be checked out.
    fn checkout(&self, cart: &Cart) -> Result<CheckoutReceipt, CheckoutError>;
}

/// Placeholder checkout that always reports "Coming Soon".
#[derive(Debug, Clone, Copy, Default)]
pub struct ComingSoonCheckout;

impl ComingSoonCheckout {
    pub const MESSAGE: &'static str = "Coming Soon";
}

impl Checkout for ComingSoonCheckout {
    fn checkout(&self, cart: &Cart) -> Result<CheckoutReceipt, CheckoutError> {
        tracing::info!(
            lines = cart.len(),
            total_items = cart.total_items(),
            "Checkout requested but not implemented"
        );
        Err(CheckoutError::NotImplemented(Self::MESSAGE))
    }
}
