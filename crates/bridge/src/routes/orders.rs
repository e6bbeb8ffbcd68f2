//! Shopify order webhook handler.
//!
//! Verifies the webhook signature, then forwards the order to FinerWorks.

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use finerworks_bridge_core::StorefrontOrder;
use tracing::{info, instrument, warn};

use crate::conversions::{finerworks_order, product_details_request};
use crate::error::AppError;
use crate::state::AppState;
use crate::webhook::HMAC_HEADER;

/// Create order webhook routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/shopify-order-created", post(order_created))
}

/// Handle Shopify's `orders/create` webhook.
///
/// The signature is checked against the raw body before anything is parsed.
/// Unsigned or mis-signed requests get 401 and cause no outbound calls.
#[instrument(skip(state, headers, body))]
async fn order_created(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let signature = headers
        .get(HMAC_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing Shopify HMAC header".into()))?;

    if !state.verifier().verify(&body, signature) {
        return Err(AppError::Unauthorized("Invalid Shopify HMAC".into()));
    }

    let order: StorefrontOrder = serde_json::from_slice(&body)?;
    info!(
        order_id = %order.id,
        line_items = order.line_items.len(),
        "New order from Shopify"
    );

    // Diagnostic only: a failed lookup never blocks the order
    let skus = order.skus();
    if !skus.is_empty() {
        match state
            .finerworks()
            .product_details(&product_details_request(&skus))
            .await
        {
            Ok(details) => info!(order_id = %order.id, %details, "Product details from FinerWorks"),
            Err(e) => warn!(order_id = %order.id, error = %e, "Product details lookup failed"),
        }
    }

    let response = state
        .finerworks()
        .submit_order(&finerworks_order(&order))
        .await
        .map_err(AppError::FinerWorks)?;

    info!(order_id = %order.id, %response, "Sent order to FinerWorks");

    Ok(StatusCode::OK)
}
