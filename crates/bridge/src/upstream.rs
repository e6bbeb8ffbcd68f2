//! Retry-free JSON transport shared by the Shopify and FinerWorks clients.
//!
//! Every call is sent exactly once. A network failure, a non-2xx status, or an
//! unparseable body comes back as an [`UpstreamError`]; nothing is retried.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::debug;

/// Longest error body kept in [`UpstreamError::Status`].
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Errors returned by outbound API calls.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Request could not be sent or the response could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-2xx status.
    #[error("API error: {status} - {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected JSON.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A credential could not be encoded as a header value.
    #[error("Invalid header {0}")]
    InvalidHeader(&'static str),
}

/// Build a header value from a credential.
///
/// The value is marked sensitive so it is hidden from `Debug` output.
///
/// # Errors
///
/// Returns `UpstreamError::InvalidHeader` if the value contains bytes that
/// are not allowed in an HTTP header.
pub fn sensitive_header(name: &'static str, value: &str) -> Result<HeaderValue, UpstreamError> {
    let mut header = HeaderValue::from_str(value).map_err(|_| UpstreamError::InvalidHeader(name))?;
    header.set_sensitive(true);
    Ok(header)
}

/// JSON-over-HTTP client: send JSON, return the parsed result or a typed failure.
#[derive(Debug, Clone)]
pub struct JsonClient {
    client: Client,
}

impl JsonClient {
    /// Create a client that attaches `default_headers` to every request.
    ///
    /// No request timeout is set, so a slow upstream that still accepts the
    /// call is not reported as a failure.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(default_headers: HeaderMap) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .default_headers(default_headers)
            .build()?;

        Ok(Self { client })
    }

    /// Send a GET request and parse the JSON response.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError` on network failure, non-2xx status, or invalid JSON.
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        headers: HeaderMap,
    ) -> Result<T, UpstreamError> {
        self.send(self.client.get(url).headers(headers)).await
    }

    /// Send a JSON POST request and parse the JSON response.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError` on network failure, non-2xx status, or invalid JSON.
    pub async fn post<T: DeserializeOwned, B: Serialize + Sync + ?Sized>(
        &self,
        url: &str,
        headers: HeaderMap,
        body: &B,
    ) -> Result<T, UpstreamError> {
        self.send(self.client.post(url).headers(headers).json(body))
            .await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, UpstreamError> {
        let response = request.send().await?;
        handle_response(response).await
    }
}

/// Check the status and parse the body of an API response.
async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, UpstreamError> {
    let status = response.status();
    let url = response.url().to_string();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(UpstreamError::Status {
            status: status.as_u16(),
            body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
        });
    }

    debug!(%url, status = status.as_u16(), "Upstream call succeeded");

    // Some endpoints answer 2xx with no body
    let body = if body.trim().is_empty() { "null" } else { body.as_str() };

    serde_json::from_str(body)
        .map_err(|e| UpstreamError::Parse(format!("Failed to parse response: {e}")))
}
