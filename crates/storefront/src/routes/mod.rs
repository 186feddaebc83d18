//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Landing page
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /products               - Products grouped by category
//!
//! # Cart (form posts, redirect after post)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart, redirects to /products
//! POST /cart/increase          - Increase quantity, redirects to /cart
//! POST /cart/decrease          - Decrease quantity, redirects to /cart
//! POST /cart/remove            - Remove line, redirects to /cart
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! POST /checkout               - Not implemented yet (501)
//!
//! # JSON API
//! GET  /api/catalog            - Catalog grouped by category
//! GET  /api/cart               - Cart lines and totals
//! ```

pub mod api;
pub mod cart;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new().route("/", get(products::index))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/increase", post(cart::increase))
        .route("/decrease", post(cart::decrease))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the JSON API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(api::catalog))
        .route("/cart", get(api::cart))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Landing page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout placeholder
        .route("/checkout", post(cart::checkout))
        // JSON API
        .nest("/api", api_routes())
}
