//! Cart route handlers.
//!
//! Every cart mutation is a form post that dispatches one transition to the
//! shared [`CartStore`](greenthumb_core::CartStore) and redirects, so the next
//! page render reads the updated cart.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Json,
    extract::State,
    response::{IntoResponse, Redirect},
};
use greenthumb_core::{Cart, CartAction, CartLineItem, CheckoutReceipt, ProductId};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: i32,
    pub name: String,
    pub thumbnail: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total_items: u64,
    pub total_price: String,
    pub line_count: usize,
}

impl From<&CartLineItem> for CartItemView {
    fn from(item: &CartLineItem) -> Self {
        Self {
            id: item.id().as_i32(),
            name: item.product.name.clone(),
            thumbnail: item.product.thumbnail.clone(),
            quantity: item.quantity.get(),
            price: item.product.price.to_string(),
            line_price: item.line_total().to_string(),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            total_items: cart.total_items(),
            total_price: cart.total_price().to_string(),
            line_count: cart.len(),
        }
    }
}

/// Form data naming a single product.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub product_id: ProductId,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub cart_count: usize,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: usize,
}

/// Dispatch one transition and leave a breadcrumb for it.
fn dispatch(state: &AppState, action: CartAction) -> Cart {
    let product_id = action.product_id().to_string();
    add_breadcrumb("cart", action.name(), Some(&[("product_id", product_id.as_str())]));
    state.cart().dispatch(action)
}

/// Display cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let cart = CartView::from(&state.cart().snapshot());
    let cart_count = cart.line_count;

    CartShowTemplate { cart, cart_count }
}

/// Add a catalog product to the cart.
///
/// The product fields are copied from the catalog. Adding a product that is
/// already in the cart leaves it unchanged.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] if the product is not in the catalog.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    let product = state
        .catalog()
        .get(form.product_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    dispatch(&state, CartAction::AddToCart(product));
    Ok(Redirect::to("/products"))
}

/// Increase a line's quantity by one.
#[instrument(skip(state))]
pub async fn increase(State(state): State<AppState>, Form(form): Form<ProductForm>) -> Redirect {
    dispatch(&state, CartAction::Increase(form.product_id));
    Redirect::to("/cart")
}

/// Decrease a line's quantity by one, stopping at one.
#[instrument(skip(state))]
pub async fn decrease(State(state): State<AppState>, Form(form): Form<ProductForm>) -> Redirect {
    dispatch(&state, CartAction::Decrease(form.product_id));
    Redirect::to("/cart")
}

/// Remove a line from the cart.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Form(form): Form<ProductForm>) -> Redirect {
    dispatch(&state, CartAction::Remove(form.product_id));
    Redirect::to("/cart")
}

/// Get cart count badge.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    CartCountTemplate {
        count: state.cart().line_count(),
    }
}

/// Check out the current cart.
///
/// # Errors
///
/// Always returns [`CheckoutError::NotImplemented`](greenthumb_core::CheckoutError)
/// until a real checkout collaborator exists.
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Result<Json<CheckoutReceipt>> {
    let cart = state.cart().snapshot();
    let receipt = state.checkout().checkout(&cart)?;
    Ok(Json(receipt))
}
