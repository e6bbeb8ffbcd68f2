//! Shopify order → FinerWorks order conversion.

use finerworks_bridge_core::{FinerWorksOrder, OrderItem, ProductDetailsItem, StorefrontOrder};

/// Build the FinerWorks order submission for a Shopify order.
///
/// The shipping address is forwarded as-is.
#[must_use]
pub fn finerworks_order(order: &StorefrontOrder) -> FinerWorksOrder {
    FinerWorksOrder {
        order_number: order.id,
        shipping_address: order.shipping_address.clone(),
        items: order
            .line_items
            .iter()
            .map(|item| OrderItem {
                sku: item.sku.clone(),
                quantity: item.quantity,
            })
            .collect(),
    }
}

/// Build a product-details lookup batch: one entry per SKU, quantity 1, no PO.
#[must_use]
pub fn product_details_request<S: AsRef<str>>(skus: &[S]) -> Vec<ProductDetailsItem> {
    skus.iter()
        .map(|sku| ProductDetailsItem {
            product_order_po: None,
            product_qty: 1,
            product_sku: sku.as_ref().to_string(),
        })
        .collect()
}
