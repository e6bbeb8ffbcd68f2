//! Shopify Admin REST API integration.
//!
//! The bridge only writes to Shopify: it creates products pulled from
//! FinerWorks and records fulfillments when FinerWorks ships an order.
//!
//! # Authentication
//!
//! Every request carries the static `X-Shopify-Access-Token` header.

mod client;

pub use client::ShopifyClient;

use async_trait::async_trait;
use finerworks_bridge_core::{FulfillmentCreateRequest, OrderId, ProductCreateRequest};
use serde_json::Value;

use crate::upstream::UpstreamError;

/// Header carrying the Admin API access token.
pub const ACCESS_TOKEN_HEADER: &str = "x-shopify-access-token";

/// Storefront operations used by the bridge.
///
/// Implemented by [`ShopifyClient`]; tests substitute in-memory fakes.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// Create a product. Returns Shopify's response body.
    async fn create_product(&self, request: &ProductCreateRequest) -> Result<Value, UpstreamError>;

    /// Create a fulfillment on an order. Returns Shopify's response body.
    async fn create_fulfillment(
        &self,
        order_id: OrderId,
        request: &FulfillmentCreateRequest,
    ) -> Result<Value, UpstreamError>;
}
