//! Integration tests for GreenThumb.
//!
//! The storefront router is driven in-process with `tower::ServiceExt::oneshot`,
//! so no server or network is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p greenthumb-integration-tests
//! ```

#![allow(clippy::missing_panics_doc)]

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, Response, StatusCode, header};
use greenthumb_core::{CartStore, Catalog};
use greenthumb_storefront::config::StorefrontConfig;
use greenthumb_storefront::state::AppState;
use tower::ServiceExt;

/// A storefront router and a handle on its cart store.
pub struct TestContext {
    pub app: Router,
    pub cart: CartStore,
}

impl TestContext {
    /// A storefront with the built-in catalog and an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(Catalog::greenthumb())
    }

    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        let state = AppState::new(StorefrontConfig::default(), catalog);
        let cart = state.cart().clone();
        Self {
            app: greenthumb_storefront::app(state),
            cart,
        }
    }

    /// Send a request through the router.
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        let request = Request::get(uri).body(Body::empty()).expect("request");
        self.send(request).await
    }

    /// Post a urlencoded form body.
    pub async fn post_form(&self, uri: &str, form: &str) -> Response<Body> {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .expect("request");
        self.send(request).await
    }

    /// Post `product_id=<id>` to a cart endpoint.
    pub async fn cart_action(&self, action: &str, product_id: i32) -> Response<Body> {
        self.post_form(&format!("/cart/{action}"), &format!("product_id={product_id}"))
            .await
    }

    /// Fetch `/api/cart` as JSON.
    pub async fn cart_json(&self) -> serde_json::Value {
        let response = self.get("/api/cart").await;
        assert_eq!(response.status(), StatusCode::OK);
        serde_json::from_str(&body_string(response).await).expect("json")
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a response body as UTF-8.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// The `Location` header of a redirect response.
#[must_use]
pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}
