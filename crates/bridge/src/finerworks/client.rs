//! FinerWorks REST API client.

use async_trait::async_trait;
use finerworks_bridge_core::{FinerWorksOrder, FinerWorksProduct, ProductDetailsItem};
use reqwest::header::{AUTHORIZATION, HeaderMap};
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::instrument;

use crate::config::FinerWorksConfig;
use crate::upstream::{JsonClient, UpstreamError, sensitive_header};

use super::FulfillmentApi;

/// FinerWorks REST API client.
#[derive(Clone)]
pub struct FinerWorksClient {
    http: JsonClient,
    config: FinerWorksConfig,
}

impl std::fmt::Debug for FinerWorksClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinerWorksClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl FinerWorksClient {
    /// Create a new FinerWorks client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &FinerWorksConfig) -> Result<Self, UpstreamError> {
        Ok(Self {
            http: JsonClient::new(HeaderMap::new())?,
            config: config.clone(),
        })
    }

    /// `Authorization: Bearer <app key>`.
    fn bearer_headers(&self) -> Result<HeaderMap, UpstreamError> {
        let bearer = format!("Bearer {}", self.config.app_key.expose_secret());
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, sensitive_header("Authorization", &bearer)?);
        Ok(headers)
    }

    /// `app_key` and `web_api_key` headers.
    fn key_pair_headers(&self) -> Result<HeaderMap, UpstreamError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "app_key",
            sensitive_header("app_key", self.config.app_key.expose_secret())?,
        );
        headers.insert(
            "web_api_key",
            sensitive_header("web_api_key", self.config.web_api_key.expose_secret())?,
        );
        Ok(headers)
    }
}

#[async_trait]
impl FulfillmentApi for FinerWorksClient {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<FinerWorksProduct>, UpstreamError> {
        self.http
            .get(&self.config.endpoint("products"), self.bearer_headers()?)
            .await
    }

    #[instrument(skip(self, order), fields(order_number = %order.order_number, items = order.items.len()))]
    async fn submit_order(&self, order: &FinerWorksOrder) -> Result<Value, UpstreamError> {
        self.http
            .post(&self.config.endpoint("orders"), self.bearer_headers()?, order)
            .await
    }

    #[instrument(skip(self, items), fields(skus = items.len()))]
    async fn product_details(&self, items: &[ProductDetailsItem]) -> Result<Value, UpstreamError> {
        self.http
            .post(
                &self.config.endpoint("get_product_details"),
                self.key_pair_headers()?,
                items,
            )
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;
    use url::Url;

    use super::*;

    fn client() -> FinerWorksClient {
        FinerWorksClient::new(&FinerWorksConfig {
            api_base: Url::parse("https://api.finerworks.com/v3").unwrap(),
            app_key: SecretString::from("fw-app-0123456789"),
            web_api_key: SecretString::from("fw-web-9876543210"),
        })
        .unwrap()
    }

    #[test]
    fn test_bearer_headers() {
        let headers = client().bearer_headers().unwrap();
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer fw-app-0123456789");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_key_pair_headers() {
        let headers = client().key_pair_headers().unwrap();
        assert_eq!(
            headers.get("app_key").unwrap().to_str().unwrap(),
            "fw-app-0123456789"
        );
        assert_eq!(
            headers.get("web_api_key").unwrap().to_str().unwrap(),
            "fw-web-9876543210"
        );
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_debug_hides_keys() {
        let debug_output = format!("{:?}", client());
        assert!(debug_output.contains("api.finerworks.com"));
        assert!(!debug_output.contains("fw-app-0123456789"));
        assert!(!debug_output.contains("fw-web-9876543210"));
    }
}
