//! GreenThumb Core - catalog, cart state machine and shared types.
//!
//! This crate is used by the `storefront` binary, which renders the catalog
//! and dispatches cart transitions on user action.
//!
//! # Architecture
//!
//! The core crate contains only types, the cart transitions and the store
//! that serializes them - no I/O, no HTTP. This keeps the cart logic
//! testable in isolation.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices and quantities
//! - [`catalog`] - The immutable product catalog and its category grouping
//! - [`cart`] - Cart line items and the four cart transitions
//! - [`store`] - The owned, observable cart store
//! - [`checkout`] - Checkout collaborator (not yet implemented)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod store;
pub mod types;

pub use cart::{Cart, CartAction, CartLineItem};
pub use catalog::{Catalog, CatalogError, CategoryGroup, Product};
pub use checkout::{Checkout, CheckoutError, CheckoutReceipt, ComingSoonCheckout};
pub use store::{CartChange, CartStore, SubscriptionId};
pub use types::*;
