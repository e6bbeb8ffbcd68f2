//! Tracking types: the FinerWorks shipment update and the Shopify fulfillment-create body.

use serde::{Deserialize, Serialize};

use super::{LocationId, OrderId};

/// Shipment update posted by FinerWorks to the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingUpdate {
    /// The Shopify order ID the shipment belongs to.
    pub order_number: OrderId,
    pub tracking_number: String,
    /// Shipping carrier, if FinerWorks reported one.
    #[serde(default)]
    pub carrier: Option<String>,
}

/// Body for `POST /admin/api/{version}/orders/{id}/fulfillments.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentCreateRequest {
    pub fulfillment: FulfillmentInput,
}

/// Fulfillment fields for the REST create call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentInput {
    /// Location the fulfillment ships from.
    pub location_id: LocationId,
    pub tracking_number: String,
    /// Carrier name as shown to the customer.
    pub tracking_company: String,
    /// Whether Shopify emails the customer the tracking details.
    pub notify_customer: bool,
}
