//! HTTP route handlers for the bridge.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Liveness text
//! GET  /health                 - Health check
//!
//! # Products (FinerWorks → Shopify)
//! GET  /sync-products          - Copy the FinerWorks catalog into Shopify
//!
//! # Orders (Shopify → FinerWorks)
//! POST /shopify-order-created  - Shopify `orders/create` webhook (HMAC verified)
//!
//! # Tracking (FinerWorks → Shopify)
//! POST /finerworks-update      - FinerWorks shipment update
//!
//! # Diagnostics
//! GET  /test-finerworks        - Product-details lookup for a known SKU
//! ```

use axum::Router;

use crate::state::AppState;

pub mod diagnostics;
pub mod fulfillments;
pub mod orders;
pub mod products;

/// Build the application router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(diagnostics::router())
        .merge(products::router())
        .merge(orders::router())
        .merge(fulfillments::router())
}
