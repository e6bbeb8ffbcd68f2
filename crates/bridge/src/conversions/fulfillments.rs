//! FinerWorks tracking update → Shopify fulfillment conversion.

use finerworks_bridge_core::{FulfillmentCreateRequest, FulfillmentInput, LocationId, TrackingUpdate};

/// Carrier name used when FinerWorks does not report one.
pub const DEFAULT_CARRIER: &str = "Other";

/// Build the Shopify fulfillment body for a tracking update.
///
/// The customer is always notified.
#[must_use]
pub fn fulfillment_create_request(
    update: &TrackingUpdate,
    location_id: LocationId,
) -> FulfillmentCreateRequest {
    FulfillmentCreateRequest {
        fulfillment: FulfillmentInput {
            location_id,
            tracking_number: update.tracking_number.clone(),
            tracking_company: update
                .carrier
                .clone()
                .unwrap_or_else(|| DEFAULT_CARRIER.to_string()),
            notify_customer: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use finerworks_bridge_core::OrderId;
    use serde_json::json;

    use super::*;

    fn update(carrier: Option<&str>) -> TrackingUpdate {
        TrackingUpdate {
            order_number: OrderId::new(1001),
            tracking_number: "TRK1".to_string(),
            carrier: carrier.map(String::from),
        }
    }

    #[test]
    fn test_missing_carrier_defaults_to_other() {
        let request = fulfillment_create_request(&update(None), LocationId::new(42));
        assert_eq!(request.fulfillment.tracking_company, DEFAULT_CARRIER);
    }

    #[test]
    fn test_carrier_passed_through() {
        for carrier in ["UPS", "USPS", "FedEx", ""] {
            let request = fulfillment_create_request(&update(Some(carrier)), LocationId::new(42));
            assert_eq!(request.fulfillment.tracking_company, carrier);
        }
    }

    #[test]
    fn test_fulfillment_body_shape() {
        let request = fulfillment_create_request(&update(Some("UPS")), LocationId::new(42));
        let value = serde_json::to_value(&request).expect("serializable");

        assert_eq!(
            value,
            json!({
                "fulfillment": {
                    "location_id": 42,
                    "tracking_number": "TRK1",
                    "tracking_company": "UPS",
                    "notify_customer": true
                }
            })
        );
    }
}
