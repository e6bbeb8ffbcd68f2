//! Integration tests for the FinerWorks tracking webhook.

use axum::http::StatusCode;
use finerworks_bridge_core::{LocationId, OrderId};
use finerworks_bridge_integration_tests::{
    LOCATION_ID, RecordingFulfillment, RecordingStorefront, TestContext,
};
use serde_json::json;

const PATH: &str = "/finerworks-update";

fn update_body(carrier: serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(&json!({
        "orderNumber": 1001,
        "trackingNumber": "1Z999AA10123456784",
        "carrier": carrier
    }))
    .expect("serializable update")
}

#[tokio::test]
async fn test_update_creates_fulfillment() {
    let ctx = TestContext::new();

    let response = ctx.post(PATH, &update_body(json!("UPS")), None).await;
    assert_eq!(response.status, StatusCode::OK);

    let fulfillments = ctx.storefront.fulfillments();
    assert_eq!(fulfillments.len(), 1);
    let (order_id, request) = &fulfillments[0];
    assert_eq!(*order_id, OrderId::new(1001));
    assert_eq!(request.fulfillment.location_id, LocationId::new(LOCATION_ID));
    assert_eq!(request.fulfillment.tracking_number, "1Z999AA10123456784");
    assert_eq!(request.fulfillment.tracking_company, "UPS");
    assert!(request.fulfillment.notify_customer);
}

#[tokio::test]
async fn test_null_carrier_defaults_to_other() {
    let ctx = TestContext::new();

    let response = ctx.post(PATH, &update_body(json!(null)), None).await;
    assert_eq!(response.status, StatusCode::OK);

    let fulfillments = ctx.storefront.fulfillments();
    assert_eq!(fulfillments.len(), 1);
    assert_eq!(fulfillments[0].1.fulfillment.tracking_company, "Other");
}

#[tokio::test]
async fn test_missing_carrier_defaults_to_other() {
    let ctx = TestContext::new();
    let body = br#"{"orderNumber": 1001, "trackingNumber": "TRK1"}"#;

    let response = ctx.post(PATH, body, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        ctx.storefront.fulfillments()[0].1.fulfillment.tracking_company,
        "Other"
    );
}

#[tokio::test]
async fn test_storefront_failure_returns_500() {
    let ctx = TestContext::with_fakes(
        RecordingStorefront::failing_fulfillments(),
        RecordingFulfillment::default(),
    );

    let response = ctx.post(PATH, &update_body(json!("USPS")), None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(ctx.storefront.fulfillments().is_empty());
}

#[tokio::test]
async fn test_malformed_update_returns_500_without_calls() {
    let ctx = TestContext::new();

    let response = ctx.post(PATH, br#"{"trackingNumber": 42}"#, None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(ctx.storefront.fulfillments().is_empty());
}
