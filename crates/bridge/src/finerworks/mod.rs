//! FinerWorks print-on-demand API integration.
//!
//! # Authentication
//!
//! FinerWorks endpoints use two credential schemes:
//! - `products` and `orders` take the app key as a bearer token
//! - `get_product_details` takes the `app_key` / `web_api_key` header pair

mod client;

pub use client::FinerWorksClient;

use async_trait::async_trait;
use finerworks_bridge_core::{FinerWorksOrder, FinerWorksProduct, ProductDetailsItem};
use serde_json::Value;

use crate::upstream::UpstreamError;

/// Fulfillment provider operations used by the bridge.
///
/// Implemented by [`FinerWorksClient`]; tests substitute in-memory fakes.
#[async_trait]
pub trait FulfillmentApi: Send + Sync {
    /// List the full product catalog.
    async fn list_products(&self) -> Result<Vec<FinerWorksProduct>, UpstreamError>;

    /// Submit an order for production. Returns the FinerWorks response body.
    async fn submit_order(&self, order: &FinerWorksOrder) -> Result<Value, UpstreamError>;

    /// Look up product details for a batch of SKUs. Returns the raw response.
    async fn product_details(&self, items: &[ProductDetailsItem]) -> Result<Value, UpstreamError>;
}
