//! Integration tests for the FinerWorks bridge.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p finerworks-bridge-integration-tests
//! ```
//!
//! The full router runs in-process against recording fakes of the Shopify
//! and FinerWorks clients, so no network access or credentials are needed.
//!
//! ```rust,ignore
//! let ctx = TestContext::new();
//! let response = ctx.get("/health").await;
//! assert_eq!(response.status, StatusCode::OK);
//! ```

use std::net::{IpAddr, Ipv4Addr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use finerworks_bridge::config::{BridgeConfig, FinerWorksConfig, ShopifyConfig};
use finerworks_bridge::finerworks::FulfillmentApi;
use finerworks_bridge::routes;
use finerworks_bridge::shopify::StorefrontApi;
use finerworks_bridge::state::AppState;
use finerworks_bridge::upstream::UpstreamError;
use finerworks_bridge::webhook::{HMAC_HEADER, WebhookVerifier};
use finerworks_bridge_core::{
    FinerWorksOrder, FinerWorksProduct, FulfillmentCreateRequest, LocationId, OrderId,
    ProductCreateRequest, ProductDetailsItem,
};
use secrecy::SecretString;
use serde_json::{Value, json};
use tower::ServiceExt;
use url::Url;

/// Shared secret the test router verifies webhooks against.
pub const WEBHOOK_SECRET: &str = "7c1e9a4b2d8f6035e1a7c9b3d5f72e4a";

/// Location fulfillments are created against in tests.
pub const LOCATION_ID: i64 = 55_501;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn unavailable() -> UpstreamError {
    UpstreamError::Status {
        status: 503,
        body: "service unavailable".to_string(),
    }
}

/// Configuration pointing at placeholder hosts. Fakes never dial out.
#[must_use]
pub fn test_config() -> BridgeConfig {
    BridgeConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        shopify: ShopifyConfig {
            store: "bridge-test.myshopify.com".to_string(),
            api_version: "2025-01".to_string(),
            access_token: SecretString::from("shpat_integration_token"),
            location_id: LocationId::new(LOCATION_ID),
            webhook_secret: SecretString::from(WEBHOOK_SECRET),
        },
        finerworks: FinerWorksConfig {
            api_base: Url::parse("https://finerworks.invalid/api/")
                .unwrap_or_else(|e| panic!("static url: {e}")),
            app_key: SecretString::from("fw_integration_app_key"),
            web_api_key: SecretString::from("fw_integration_web_key"),
        },
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}

// =============================================================================
// Recording fakes
// =============================================================================

/// In-memory Shopify that records every write.
#[derive(Debug, Default)]
pub struct RecordingStorefront {
    products: Mutex<Vec<ProductCreateRequest>>,
    product_attempts: AtomicUsize,
    fulfillments: Mutex<Vec<(OrderId, FulfillmentCreateRequest)>>,
    /// Fail product creation once this many products have been created.
    fail_products_after: Option<usize>,
    fail_fulfillments: bool,
}

impl RecordingStorefront {
    /// Fail `create_product` after `count` successful calls.
    #[must_use]
    pub fn failing_products_after(count: usize) -> Self {
        Self {
            fail_products_after: Some(count),
            ..Self::default()
        }
    }

    /// Fail every `create_fulfillment` call.
    #[must_use]
    pub fn failing_fulfillments() -> Self {
        Self {
            fail_fulfillments: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn products(&self) -> Vec<ProductCreateRequest> {
        lock(&self.products).clone()
    }

    /// Number of `create_product` calls, including failed ones.
    #[must_use]
    pub fn product_attempts(&self) -> usize {
        self.product_attempts.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn fulfillments(&self) -> Vec<(OrderId, FulfillmentCreateRequest)> {
        lock(&self.fulfillments).clone()
    }
}

#[async_trait]
impl StorefrontApi for RecordingStorefront {
    async fn create_product(&self, request: &ProductCreateRequest) -> Result<Value, UpstreamError> {
        self.product_attempts.fetch_add(1, Ordering::SeqCst);
        let mut products = lock(&self.products);
        if self.fail_products_after.is_some_and(|n| products.len() >= n) {
            return Err(unavailable());
        }
        products.push(request.clone());
        Ok(json!({ "product": { "id": products.len(), "title": request.product.title } }))
    }

    async fn create_fulfillment(
        &self,
        order_id: OrderId,
        request: &FulfillmentCreateRequest,
    ) -> Result<Value, UpstreamError> {
        if self.fail_fulfillments {
            return Err(unavailable());
        }
        lock(&self.fulfillments).push((order_id, request.clone()));
        Ok(json!({ "fulfillment": { "id": 1, "order_id": order_id } }))
    }
}

/// In-memory FinerWorks that records orders and detail lookups.
#[derive(Debug, Default)]
pub struct RecordingFulfillment {
    catalog: Vec<FinerWorksProduct>,
    orders: Mutex<Vec<FinerWorksOrder>>,
    lookups: Mutex<Vec<Vec<ProductDetailsItem>>>,
    fail_catalog: bool,
    fail_orders: bool,
    fail_lookups: bool,
}

impl RecordingFulfillment {
    /// Serve `catalog` from `list_products`.
    #[must_use]
    pub fn with_catalog(catalog: Vec<FinerWorksProduct>) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn failing_catalog(mut self) -> Self {
        self.fail_catalog = true;
        self
    }

    #[must_use]
    pub const fn failing_orders(mut self) -> Self {
        self.fail_orders = true;
        self
    }

    #[must_use]
    pub const fn failing_lookups(mut self) -> Self {
        self.fail_lookups = true;
        self
    }

    #[must_use]
    pub fn orders(&self) -> Vec<FinerWorksOrder> {
        lock(&self.orders).clone()
    }

    #[must_use]
    pub fn lookups(&self) -> Vec<Vec<ProductDetailsItem>> {
        lock(&self.lookups).clone()
    }
}

#[async_trait]
impl FulfillmentApi for RecordingFulfillment {
    async fn list_products(&self) -> Result<Vec<FinerWorksProduct>, UpstreamError> {
        if self.fail_catalog {
            return Err(unavailable());
        }
        Ok(self.catalog.clone())
    }

    async fn submit_order(&self, order: &FinerWorksOrder) -> Result<Value, UpstreamError> {
        if self.fail_orders {
            return Err(unavailable());
        }
        lock(&self.orders).push(order.clone());
        Ok(json!({ "status": "received", "order_po": order.order_number }))
    }

    async fn product_details(&self, items: &[ProductDetailsItem]) -> Result<Value, UpstreamError> {
        lock(&self.lookups).push(items.to_vec());
        if self.fail_lookups {
            return Err(unavailable());
        }
        let skus: Vec<&str> = items.iter().map(|i| i.product_sku.as_str()).collect();
        Ok(json!({ "product_list": skus }))
    }
}

// =============================================================================
// Test context
// =============================================================================

/// Response captured from the in-process router.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Body as text.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Body parsed as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the body is not JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|e| panic!("response is not JSON ({e}): {}", self.text()))
    }
}

/// Router wired to recording fakes.
pub struct TestContext {
    pub storefront: Arc<RecordingStorefront>,
    pub fulfillment: Arc<RecordingFulfillment>,
    verifier: WebhookVerifier,
    app: Router,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Context with empty, always-succeeding fakes.
    #[must_use]
    pub fn new() -> Self {
        Self::with_fakes(RecordingStorefront::default(), RecordingFulfillment::default())
    }

    /// Context around the given fakes.
    #[must_use]
    pub fn with_fakes(storefront: RecordingStorefront, fulfillment: RecordingFulfillment) -> Self {
        let storefront = Arc::new(storefront);
        let fulfillment = Arc::new(fulfillment);
        let state = AppState::with_clients(
            test_config(),
            Arc::clone(&storefront) as Arc<dyn StorefrontApi>,
            Arc::clone(&fulfillment) as Arc<dyn FulfillmentApi>,
        );

        Self {
            storefront,
            fulfillment,
            verifier: WebhookVerifier::new(SecretString::from(WEBHOOK_SECRET)),
            app: routes::router().with_state(state),
        }
    }

    /// Signature Shopify would send for `body`.
    #[must_use]
    pub fn sign(&self, body: &[u8]) -> String {
        self.verifier.sign(body)
    }

    /// Send a request through the router and collect the response.
    ///
    /// # Panics
    ///
    /// Panics if the router fails or the body cannot be read.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .unwrap_or_else(|e| panic!("router error: {e}"));
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_else(|e| panic!("unreadable body: {e}"));

        TestResponse {
            status,
            body: body.to_vec(),
        }
    }

    /// Send a GET request.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::get(path)
            .body(Body::empty())
            .unwrap_or_else(|e| panic!("invalid request: {e}"));
        self.send(request).await
    }

    /// POST a JSON body, optionally with an `X-Shopify-Hmac-Sha256` header.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built.
    pub async fn post(&self, path: &str, body: &[u8], signature: Option<&str>) -> TestResponse {
        let mut builder = Request::post(path).header("content-type", "application/json");
        if let Some(signature) = signature {
            builder = builder.header(HMAC_HEADER, signature);
        }
        let request = builder
            .body(Body::from(body.to_vec()))
            .unwrap_or_else(|e| panic!("invalid request: {e}"));
        self.send(request).await
    }

    /// POST a body signed with the test webhook secret.
    pub async fn post_signed(&self, path: &str, body: &[u8]) -> TestResponse {
        let signature = self.sign(body);
        self.post(path, body, Some(&signature)).await
    }
}
