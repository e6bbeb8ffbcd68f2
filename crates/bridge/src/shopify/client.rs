//! Shopify Admin REST API client.

use async_trait::async_trait;
use finerworks_bridge_core::{FulfillmentCreateRequest, OrderId, ProductCreateRequest};
use reqwest::header::HeaderMap;
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::instrument;

use crate::config::ShopifyConfig;
use crate::upstream::{JsonClient, UpstreamError, sensitive_header};

use super::{ACCESS_TOKEN_HEADER, StorefrontApi};

/// Shopify Admin REST API client.
#[derive(Clone)]
pub struct ShopifyClient {
    http: JsonClient,
    /// e.g. `https://store.myshopify.com/admin/api/2025-01`
    api_base: String,
}

impl std::fmt::Debug for ShopifyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyClient")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl ShopifyClient {
    /// Create a new Shopify client.
    ///
    /// # Errors
    ///
    /// Returns error if the access token is not a valid header value or the
    /// HTTP client fails to build.
    pub fn new(config: &ShopifyConfig) -> Result<Self, UpstreamError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCESS_TOKEN_HEADER,
            sensitive_header(ACCESS_TOKEN_HEADER, config.access_token.expose_secret())?,
        );

        Ok(Self {
            http: JsonClient::new(headers)?,
            api_base: config.admin_api_base(),
        })
    }

    fn products_url(&self) -> String {
        format!("{}/products.json", self.api_base)
    }

    fn fulfillments_url(&self, order_id: OrderId) -> String {
        format!("{}/orders/{order_id}/fulfillments.json", self.api_base)
    }
}

#[async_trait]
impl StorefrontApi for ShopifyClient {
    #[instrument(skip(self, request), fields(title = %request.product.title))]
    async fn create_product(&self, request: &ProductCreateRequest) -> Result<Value, UpstreamError> {
        self.http
            .post(&self.products_url(), HeaderMap::new(), request)
            .await
    }

    #[instrument(skip(self, request), fields(order_id = %order_id))]
    async fn create_fulfillment(
        &self,
        order_id: OrderId,
        request: &FulfillmentCreateRequest,
    ) -> Result<Value, UpstreamError> {
        self.http
            .post(&self.fulfillments_url(order_id), HeaderMap::new(), request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use finerworks_bridge_core::LocationId;
    use secrecy::SecretString;

    use super::*;

    fn client() -> ShopifyClient {
        ShopifyClient::new(&ShopifyConfig {
            store: "emeryart.myshopify.com".to_string(),
            api_version: "2025-01".to_string(),
            access_token: SecretString::from("shpat_0123456789abcdef"),
            location_id: LocationId::new(42),
            webhook_secret: SecretString::from("whsec_0123456789abcdef"),
        })
        .expect("client builds")
    }

    #[test]
    fn test_products_url() {
        assert_eq!(
            client().products_url(),
            "https://emeryart.myshopify.com/admin/api/2025-01/products.json"
        );
    }

    #[test]
    fn test_fulfillments_url() {
        assert_eq!(
            client().fulfillments_url(OrderId::new(1001)),
            "https://emeryart.myshopify.com/admin/api/2025-01/orders/1001/fulfillments.json"
        );
    }

    #[test]
    fn test_debug_hides_token() {
        let debug_output = format!("{:?}", client());
        assert!(debug_output.contains("emeryart.myshopify.com"));
        assert!(!debug_output.contains("shpat_0123456789abcdef"));
    }

    #[test]
    fn test_rejects_token_with_newline() {
        let result = ShopifyClient::new(&ShopifyConfig {
            store: "emeryart.myshopify.com".to_string(),
            api_version: "2025-01".to_string(),
            access_token: SecretString::from("shpat\n0123"),
            location_id: LocationId::new(42),
            webhook_secret: SecretString::from("whsec_0123456789abcdef"),
        });
        assert!(matches!(result, Err(UpstreamError::InvalidHeader(_))));
    }
}
