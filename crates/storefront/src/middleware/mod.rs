//! Storefront middleware.
//!
//! Layers wrap the router outermost first: Sentry (binary only), then
//! `TraceLayer`, then [`propagate_request_id`] so the id lands on the trace
//! span.

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, propagate_request_id};
