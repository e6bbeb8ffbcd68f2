//! Request ID middleware for correlating webhook deliveries in logs.
//!
//! Shopify sends a unique `X-Shopify-Webhook-Id` with every delivery; when it
//! is present it becomes the request ID so our logs line up with Shopify's
//! delivery history. Otherwise an upstream `x-request-id` is reused, and
//! failing that a UUID v4 is generated. The request ID is:
//! - Recorded in the current tracing span
//! - Added to the Sentry scope for error correlation
//! - Returned in the response headers

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Delivery ID Shopify attaches to each webhook.
const SHOPIFY_WEBHOOK_ID_HEADER: &str = "x-shopify-webhook-id";

/// Middleware that ensures every request has a unique request ID.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = [SHOPIFY_WEBHOOK_ID_HEADER, REQUEST_ID_HEADER]
        .iter()
        .find_map(|name| request.headers().get(*name).and_then(|h| h.to_str().ok()))
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    Span::current().record("request_id", &request_id);

    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
