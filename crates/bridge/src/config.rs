//! Bridge configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPIFY_STORE` - Shopify store domain (e.g., your-store.myshopify.com)
//! - `SHOPIFY_TOKEN` - Shopify Admin API access token
//! - `SHOPIFY_LOCATION_ID` - Numeric location ID fulfillments are recorded against
//! - `SHOPIFY_WEBHOOK_SECRET` - Shared secret used to sign Shopify webhooks
//! - `FINERWORKS_API_BASE` - FinerWorks API base URL (e.g., <https://api.finerworks.com/v3>)
//! - `FINERWORKS_KEY` - FinerWorks app key (also sent as the bearer token)
//! - `FINERWORKS_WEB_KEY` - FinerWorks web API key
//!
//! ## Optional
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - Listen port (default: 3000)
//! - `SHOPIFY_API_VERSION` - Admin REST API version (default: 2025-01)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Traces sample rate (default: 1.0)

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use finerworks_bridge_core::LocationId;
use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;
const DEFAULT_SHOPIFY_API_VERSION: &str = "2025-01";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Bridge application configuration.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Shopify Admin REST API configuration
    pub shopify: ShopifyConfig,
    /// FinerWorks API configuration
    pub finerworks: FinerWorksConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// Shopify Admin REST API configuration.
///
/// Implements `Debug` manually to redact the access token and webhook secret.
#[derive(Clone)]
pub struct ShopifyConfig {
    /// Shopify store domain (e.g., your-store.myshopify.com)
    pub store: String,
    /// Admin REST API version (e.g., 2025-01)
    pub api_version: String,
    /// Static Admin API access token
    pub access_token: SecretString,
    /// Location that fulfillments are created against
    pub location_id: LocationId,
    /// Shared secret for `X-Shopify-Hmac-Sha256` verification
    pub webhook_secret: SecretString,
}

impl std::fmt::Debug for ShopifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyConfig")
            .field("store", &self.store)
            .field("api_version", &self.api_version)
            .field("access_token", &"[REDACTED]")
            .field("location_id", &self.location_id)
            .field("webhook_secret", &"[REDACTED]")
            .finish()
    }
}

impl ShopifyConfig {
    /// Base URL of the Admin REST API, e.g. `https://store/admin/api/2025-01`.
    #[must_use]
    pub fn admin_api_base(&self) -> String {
        format!("https://{}/admin/api/{}", self.store, self.api_version)
    }

    fn from_env() -> Result<Self, ConfigError> {
        let location_id = get_required_env("SHOPIFY_LOCATION_ID")?
            .parse::<LocationId>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SHOPIFY_LOCATION_ID".to_string(), e.to_string())
            })?;

        Ok(Self {
            store: get_required_env("SHOPIFY_STORE")?,
            api_version: get_env_or_default("SHOPIFY_API_VERSION", DEFAULT_SHOPIFY_API_VERSION),
            access_token: get_checked_secret("SHOPIFY_TOKEN")?,
            location_id,
            webhook_secret: get_validated_secret("SHOPIFY_WEBHOOK_SECRET")?,
        })
    }
}

/// FinerWorks API configuration.
///
/// Implements `Debug` manually to redact both keys.
#[derive(Clone)]
pub struct FinerWorksConfig {
    /// API base URL, without a trailing slash
    pub api_base: Url,
    /// App key, sent as `app_key` and as the bearer token
    pub app_key: SecretString,
    /// Web API key, sent as `web_api_key`
    pub web_api_key: SecretString,
}

impl std::fmt::Debug for FinerWorksConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinerWorksConfig")
            .field("api_base", &self.api_base.as_str())
            .field("app_key", &"[REDACTED]")
            .field("web_api_key", &"[REDACTED]")
            .finish()
    }
}

impl FinerWorksConfig {
    /// Build an endpoint URL under the API base.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn from_env() -> Result<Self, ConfigError> {
        let api_base = Url::parse(&get_required_env("FINERWORKS_API_BASE")?).map_err(|e| {
            ConfigError::InvalidEnvVar("FINERWORKS_API_BASE".to_string(), e.to_string())
        })?;

        Ok(Self {
            api_base,
            app_key: get_checked_secret("FINERWORKS_KEY")?,
            web_api_key: get_checked_secret("FINERWORKS_WEB_KEY")?,
        })
    }
}

impl BridgeConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the webhook secret fails validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("HOST", "0.0.0.0")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string()))?;

        let shopify = ShopifyConfig::from_env()?;
        let finerworks = FinerWorksConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = get_optional_env("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            host,
            port,
            shopify,
            finerworks,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use a randomly generated secret."
            ),
        ));
    }

    Ok(())
}

/// Load and validate a secret from environment.
///
/// Weak values are rejected.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}

/// Load a vendor-issued credential from environment.
///
/// Key formats are outside our control, so weak values only log a warning.
fn get_checked_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    if let Err(e) = validate_secret_strength(&value, key) {
        tracing::warn!("{key} validation warning: {e}");
    }
    Ok(SecretString::from(value))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn shopify_config() -> ShopifyConfig {
        ShopifyConfig {
            store: "test.myshopify.com".to_string(),
            api_version: DEFAULT_SHOPIFY_API_VERSION.to_string(),
            access_token: SecretString::from("shpat_super_secret_access_token"),
            location_id: LocationId::new(987_654),
            webhook_secret: SecretString::from("super_secret_webhook_secret"),
        }
    }

    fn finerworks_config(base: &str) -> FinerWorksConfig {
        FinerWorksConfig {
            api_base: Url::parse(base).unwrap(),
            app_key: SecretString::from("super_secret_app_key"),
            web_api_key: SecretString::from("super_secret_web_key"),
        }
    }

    #[test]
    fn test_shannon_entropy_empty() {
        assert!((shannon_entropy("") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_two_chars() {
        // "ab" has entropy of 1 bit per char (50% a, 50% b)
        let entropy = shannon_entropy("ab");
        assert!((entropy - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_validate_secret_strength_placeholder() {
        let result = validate_secret_strength("your-webhook-secret", "TEST_VAR");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_validate_secret_strength_low_entropy() {
        let result = validate_secret_strength("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "TEST_VAR");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_validate_secret_strength_shopify_style_hex() {
        // Shopify webhook secrets are 64 hex characters
        let result = validate_secret_strength(
            "4f9c2a7e1b3d5f60a8c9e2b4d6f81a3c5e7092b4d6f8a1c3e5b7d9f0a2c4e6b8",
            "TEST_VAR",
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = BridgeConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            shopify: shopify_config(),
            finerworks: finerworks_config("https://api.finerworks.com/v3"),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_admin_api_base() {
        assert_eq!(
            shopify_config().admin_api_base(),
            "https://test.myshopify.com/admin/api/2025-01"
        );
    }

    #[test]
    fn test_finerworks_endpoint_joins_paths() {
        let config = finerworks_config("https://api.finerworks.com/v3");
        assert_eq!(
            config.endpoint("products"),
            "https://api.finerworks.com/v3/products"
        );

        let config = finerworks_config("https://api.finerworks.com/v3/");
        assert_eq!(
            config.endpoint("/get_product_details"),
            "https://api.finerworks.com/v3/get_product_details"
        );
    }

    #[test]
    fn test_shopify_config_debug_redacts_secrets() {
        let debug_output = format!("{:?}", shopify_config());

        assert!(debug_output.contains("test.myshopify.com"));
        assert!(debug_output.contains("987654"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("shpat_super_secret_access_token"));
        assert!(!debug_output.contains("super_secret_webhook_secret"));
    }

    #[test]
    fn test_finerworks_config_debug_redacts_secrets() {
        let debug_output = format!("{:?}", finerworks_config("https://api.finerworks.com/v3"));

        assert!(debug_output.contains("api.finerworks.com"));
        assert!(!debug_output.contains("super_secret_app_key"));
        assert!(!debug_output.contains("super_secret_web_key"));
    }
}
