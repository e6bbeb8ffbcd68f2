//! Integration tests for the catalog sync endpoint.

use axum::http::StatusCode;
use finerworks_bridge_core::FinerWorksProduct;
use finerworks_bridge_integration_tests::{RecordingFulfillment, RecordingStorefront, TestContext};
use serde_json::json;

const PATH: &str = "/sync-products";

fn catalog() -> Vec<FinerWorksProduct> {
    serde_json::from_value(json!([
        {
            "name": "Sunset Print",
            "description": "<p>Giclee print</p>",
            "variants": [
                { "sku": "SP-8X10", "price": 24.5, "option1": "8x10" },
                { "sku": "SP-16X20", "price": "49.00", "option1": "16x20" }
            ]
        },
        {
            "name": "Harbor Canvas",
            "variants": [
                { "sku": "HC-12X12", "price": 80 }
            ]
        },
        {
            "name": "Forest Poster",
            "variants": []
        }
    ]))
    .expect("valid catalog")
}

#[tokio::test]
async fn test_sync_creates_every_product() {
    let ctx = TestContext::with_fakes(
        RecordingStorefront::default(),
        RecordingFulfillment::with_catalog(catalog()),
    );

    let response = ctx.get(PATH).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({
            "message": "Products synced from FinerWorks to Shopify",
            "synced": 3
        })
    );

    let products = ctx.storefront.products();
    let titles: Vec<&str> = products.iter().map(|p| p.product.title.as_str()).collect();
    assert_eq!(titles, ["Sunset Print", "Harbor Canvas", "Forest Poster"]);
    assert_eq!(ctx.storefront.product_attempts(), 3);
    assert!(products.iter().all(|p| p.product.vendor == "FinerWorks"));

    let first = serde_json::to_value(&products[0]).expect("serializable");
    assert_eq!(first["product"]["body_html"], "<p>Giclee print</p>");
    assert_eq!(first["product"]["variants"][0]["sku"], "SP-8X10");
    assert_eq!(first["product"]["variants"][0]["price"], "24.5");
    assert_eq!(first["product"]["variants"][1]["price"], "49.00");
    assert_eq!(first["product"]["variants"][0]["option1"], "8x10");
}

#[tokio::test]
async fn test_sync_empty_catalog() {
    let ctx = TestContext::new();

    let response = ctx.get(PATH).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["synced"], 0);
    assert!(ctx.storefront.products().is_empty());
}

#[tokio::test]
async fn test_sync_stops_at_first_failure() {
    let ctx = TestContext::with_fakes(
        RecordingStorefront::failing_products_after(1),
        RecordingFulfillment::with_catalog(catalog()),
    );

    let response = ctx.get(PATH).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let error = response.json()["error"]
        .as_str()
        .expect("error message")
        .to_string();
    assert!(error.contains("Shopify"), "unexpected error: {error}");

    // The product created before the failure stays; nothing after it is attempted
    assert_eq!(ctx.storefront.products().len(), 1);
    assert_eq!(ctx.storefront.product_attempts(), 2);
}

#[tokio::test]
async fn test_sync_catalog_failure_returns_500() {
    let ctx = TestContext::with_fakes(
        RecordingStorefront::default(),
        RecordingFulfillment::with_catalog(catalog()).failing_catalog(),
    );

    let response = ctx.get(PATH).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.json()["error"].is_string());
    assert!(ctx.storefront.products().is_empty());
}

#[tokio::test]
async fn test_sync_forwards_non_numeric_price_unchanged() {
    let catalog: Vec<FinerWorksProduct> = serde_json::from_value(json!([
        {
            "name": "Quote Print",
            "variants": [
                { "sku": "QP-BLANK", "price": "" },
                { "sku": "QP-DOLLAR", "price": "$19.99" }
            ]
        },
        {
            "name": "Priced Print",
            "variants": [ { "sku": "PP-1", "price": 12 } ]
        }
    ]))
    .expect("catalog with non-numeric prices parses");

    let ctx = TestContext::with_fakes(
        RecordingStorefront::default(),
        RecordingFulfillment::with_catalog(catalog),
    );

    let response = ctx.get(PATH).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["synced"], 2);

    let products = ctx.storefront.products();
    let first = serde_json::to_value(&products[0]).expect("serializable");
    assert_eq!(first["product"]["variants"][0]["price"], "");
    assert_eq!(first["product"]["variants"][1]["price"], "$19.99");
}
