//! Application state shared across handlers.
//!
//! The state is immutable: configuration plus the two API clients. Requests
//! never share mutable data.

use std::sync::Arc;

use crate::config::BridgeConfig;
use crate::finerworks::{FinerWorksClient, FulfillmentApi};
use crate::shopify::{ShopifyClient, StorefrontApi};
use crate::upstream::UpstreamError;
use crate::webhook::WebhookVerifier;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: BridgeConfig,
    verifier: WebhookVerifier,
    shopify: Arc<dyn StorefrontApi>,
    finerworks: Arc<dyn FulfillmentApi>,
}

impl AppState {
    /// Build state with the real Shopify and FinerWorks clients.
    ///
    /// # Errors
    ///
    /// Returns error if either HTTP client fails to build.
    pub fn new(config: BridgeConfig) -> Result<Self, UpstreamError> {
        let shopify = ShopifyClient::new(&config.shopify)?;
        let finerworks = FinerWorksClient::new(&config.finerworks)?;
        Ok(Self::with_clients(config, Arc::new(shopify), Arc::new(finerworks)))
    }

    /// Build state around caller-supplied clients.
    #[must_use]
    pub fn with_clients(
        config: BridgeConfig,
        shopify: Arc<dyn StorefrontApi>,
        finerworks: Arc<dyn FulfillmentApi>,
    ) -> Self {
        let verifier = WebhookVerifier::new(config.shopify.webhook_secret.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                verifier,
                shopify,
                finerworks,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &BridgeConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn verifier(&self) -> &WebhookVerifier {
        &self.inner.verifier
    }

    #[must_use]
    pub fn shopify(&self) -> &dyn StorefrontApi {
        self.inner.shopify.as_ref()
    }

    #[must_use]
    pub fn finerworks(&self) -> &dyn FulfillmentApi {
        self.inner.finerworks.as_ref()
    }
}
