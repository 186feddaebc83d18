//! Correlation ids for storefront requests.
//!
//! Every response carries an `x-request-id` header. A non-empty id sent by the
//! caller is echoed back, otherwise a UUID v4 is minted. The same id is stored
//! on the request span and tagged on the Sentry scope.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

/// Header carrying the correlation id in both directions.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// The caller's id, if it sent a usable one.
fn incoming_id(request: &Request) -> Option<String> {
    request
        .headers()
        .get(REQUEST_ID_HEADER)?
        .to_str()
        .ok()
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
}

/// Attach a correlation id to the request and echo it on the response.
pub async fn propagate_request_id(request: Request, next: Next) -> Response {
    let id = incoming_id(&request).unwrap_or_else(|| Uuid::new_v4().to_string());

    Span::current().record("request_id", id.as_str());
    sentry::configure_scope(|scope| scope.set_tag("request_id", &id));

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;

    use super::*;

    fn request_with(id: Option<&str>) -> Request {
        let mut builder = Request::builder().uri("/");
        if let Some(id) = id {
            builder = builder.header(REQUEST_ID_HEADER, id);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_incoming_id() {
        assert_eq!(
            incoming_id(&request_with(Some("edge-7"))).as_deref(),
            Some("edge-7")
        );
        assert_eq!(incoming_id(&request_with(Some(""))), None);
        assert_eq!(incoming_id(&request_with(None)), None);
    }
}
