//! JSON API handlers.
//!
//! Read-only views of the catalog and the cart for scripted clients.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use greenthumb_core::{Cart, CategoryGroup, Price};
use serde::Serialize;
use tracing::instrument;

use crate::state::AppState;

/// Catalog response body.
#[derive(Serialize)]
pub struct CatalogResponse<'a> {
    pub categories: Vec<CategoryGroup<'a>>,
}

/// Cart response body.
#[derive(Serialize)]
pub struct CartResponse {
    pub items: Cart,
    pub line_count: usize,
    pub total_items: u64,
    pub total_price: Price,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            line_count: cart.len(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
            items: cart,
        }
    }
}

/// The catalog grouped by category.
#[instrument(skip(state))]
pub async fn catalog(State(state): State<AppState>) -> Response {
    Json(CatalogResponse {
        categories: state.catalog().by_category(),
    })
    .into_response()
}

/// The current cart with its totals.
#[instrument(skip(state))]
pub async fn cart(State(state): State<AppState>) -> Json<CartResponse> {
    Json(CartResponse::from(state.cart().snapshot()))
}
