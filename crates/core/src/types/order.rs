//! Order types: the Shopify `orders/create` webhook and the FinerWorks order submission.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::OrderId;

// =============================================================================
// Shopify (inbound)
// =============================================================================

/// The subset of a Shopify order webhook the bridge reads.
///
/// Any other fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontOrder {
    /// Shopify order ID.
    pub id: OrderId,
    /// Shipping address, owned entirely by Shopify and forwarded untouched.
    #[serde(default)]
    pub shipping_address: Value,
    /// Ordered line items.
    pub line_items: Vec<LineItem>,
}

/// A single Shopify order line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Variant SKU. Shopify sends `null` for custom items.
    pub sku: Option<String>,
    /// Quantity ordered.
    pub quantity: u32,
}

impl StorefrontOrder {
    /// SKUs of every line item that has one, in order.
    #[must_use]
    pub fn skus(&self) -> Vec<&str> {
        self.line_items
            .iter()
            .filter_map(|item| item.sku.as_deref())
            .collect()
    }
}

// =============================================================================
// FinerWorks (outbound)
// =============================================================================

/// Order submission body for `POST {base}/orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinerWorksOrder {
    /// The Shopify order ID, used as the FinerWorks order number.
    pub order_number: OrderId,
    /// Shipping address exactly as Shopify sent it.
    pub shipping_address: Value,
    /// One item per Shopify line item.
    pub items: Vec<OrderItem>,
}

/// A FinerWorks order item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Forwarded as `null` when the Shopify line item has no SKU.
    pub sku: Option<String>,
    pub quantity: u32,
}

/// One entry of a `POST {base}/get_product_details` batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetailsItem {
    /// Purchase order reference. Always sent as `null` for lookups.
    pub product_order_po: Option<String>,
    pub product_qty: u32,
    pub product_sku: String,
}
