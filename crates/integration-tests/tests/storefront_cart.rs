//! Integration tests for the storefront cart flow.
//!
//! Each test builds its own storefront, so carts never leak between tests.

#![allow(clippy::indexing_slicing)]

use axum::http::StatusCode;
use greenthumb_core::ProductId;
use greenthumb_integration_tests::{TestContext, body_string, location};
use serde_json::json;

#[tokio::test]
async fn test_add_increase_decrease_remove_scenario() {
    let ctx = TestContext::new();

    let response = ctx.cart_action("add", 1).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/products"));

    let cart = ctx.cart_json().await;
    assert_eq!(cart["line_count"], 1);
    assert_eq!(cart["items"][0]["id"], 1);
    assert_eq!(cart["items"][0]["quantity"], 1);

    let response = ctx.cart_action("increase", 1).await;
    assert_eq!(location(&response), Some("/cart"));
    let cart = ctx.cart_json().await;
    assert_eq!(cart["items"][0]["quantity"], 2);
    assert_eq!(cart["total_items"], 2);
    assert_eq!(cart["total_price"]["amount"], "40");

    ctx.cart_action("decrease", 1).await;
    assert_eq!(ctx.cart_json().await["items"][0]["quantity"], 1);

    // Floor at one: the line is kept.
    ctx.cart_action("decrease", 1).await;
    let cart = ctx.cart_json().await;
    assert_eq!(cart["line_count"], 1);
    assert_eq!(cart["items"][0]["quantity"], 1);

    ctx.cart_action("remove", 1).await;
    let cart = ctx.cart_json().await;
    assert_eq!(cart["items"], json!([]));
    assert_eq!(cart["total_items"], 0);
}

#[tokio::test]
async fn test_double_add_keeps_one_line() {
    let ctx = TestContext::new();

    ctx.cart_action("add", 3).await;
    ctx.cart_action("add", 3).await;

    let cart = ctx.cart.snapshot();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.get(ProductId::new(3)).map(|i| i.quantity.get()), Some(1));
}

#[tokio::test]
async fn test_unknown_product_add_is_not_found() {
    let ctx = TestContext::new();

    let response = ctx.cart_action("add", 99).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(ctx.cart.snapshot().is_empty());
}

#[tokio::test]
async fn test_absent_ids_are_no_ops() {
    let ctx = TestContext::new();
    ctx.cart_action("add", 2).await;
    let before = ctx.cart.snapshot();

    for action in ["increase", "decrease", "remove"] {
        let response = ctx.cart_action(action, 42).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), Some("/cart"));
    }

    assert_eq!(ctx.cart.snapshot(), before);
}

#[tokio::test]
async fn test_malformed_product_id_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx.post_form("/cart/add", "product_id=monstera").await;
    assert!(response.status().is_client_error());
    assert!(ctx.cart.snapshot().is_empty());
}

#[tokio::test]
async fn test_products_page_disables_added_items() {
    let ctx = TestContext::new();

    let html = body_string(ctx.get("/products").await).await;
    assert_eq!(html.matches("disabled>Add to Cart").count(), 0);
    assert!(html.contains("Cart 🛒 (0)"));

    ctx.cart_action("add", 5).await;
    ctx.cart_action("increase", 5).await;

    let html = body_string(ctx.get("/products").await).await;
    assert_eq!(html.matches("disabled>Add to Cart").count(), 1);
    // The badge counts lines, not units.
    assert!(html.contains("Cart 🛒 (1)"));

    let tropical = html.find("<h3>Tropical</h3>").expect("tropical heading");
    let succulent = html.find("<h3>Succulent</h3>").expect("succulent heading");
    let vine = html.find("<h3>Vine</h3>").expect("vine heading");
    assert!(tropical < succulent && succulent < vine);
}

#[tokio::test]
async fn test_cart_page_shows_totals() {
    let ctx = TestContext::new();
    ctx.cart_action("add", 1).await;
    ctx.cart_action("add", 4).await;
    ctx.cart_action("increase", 4).await;

    let response = ctx.get("/cart").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;

    assert!(html.contains("Total Items: <span id=\"total-items\">3</span>"));
    assert!(html.contains("Total Cost: <span id=\"total-price\">$44.00</span>"));
    assert!(html.contains("Monstera"));
    assert!(html.contains("Aloe Vera"));
    assert!(!html.contains("Your cart is empty."));

    let count = body_string(ctx.get("/cart/count").await).await;
    assert_eq!(count.trim(), "2");
}

#[tokio::test]
async fn test_checkout_is_not_implemented() {
    let ctx = TestContext::new();

    let response = ctx.post_form("/checkout", "").await;
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body_string(response).await, "Coming Soon");
    assert!(ctx.cart.snapshot().is_empty());

    ctx.cart_action("add", 6).await;
    let response = ctx.post_form("/checkout", "").await;
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body_string(response).await, "Coming Soon");

    // Checkout leaves the cart alone.
    assert_eq!(ctx.cart.snapshot().len(), 1);
}
