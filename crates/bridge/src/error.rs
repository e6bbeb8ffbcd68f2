//! Unified error handling for the bridge.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::upstream::UpstreamError;

/// Application-level error type for request handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Webhook signature missing or wrong.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Inbound payload did not match the expected shape.
    #[error("Invalid payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Shopify API call failed.
    #[error("Shopify error: {0}")]
    Shopify(#[source] UpstreamError),

    /// FinerWorks API call failed.
    #[error("FinerWorks error: {0}")]
    FinerWorks(#[source] UpstreamError),
}

impl AppError {
    /// HTTP status for this error.
    ///
    /// Upstream failures and malformed payloads are all reported as 500.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Payload(_) | Self::Shopify(_) | Self::FinerWorks(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn report(&self) {
        if self.status().is_server_error() {
            let event_id = sentry::capture_error(self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Bridge request error"
            );
        } else {
            tracing::warn!(error = %self, "Bridge request rejected");
        }
    }
}

/// Webhook responses carry only a status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.report();
        self.status().into_response()
    }
}

/// Wraps [`AppError`] for routes that answer `{"error": "..."}`.
#[derive(Debug)]
pub struct JsonError(pub AppError);

impl<E: Into<AppError>> From<E> for JsonError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for JsonError {
    fn into_response(self) -> Response {
        let Self(err) = self;
        err.report();
        (err.status(), Json(json!({ "error": err.to_string() }))).into_response()
    }
}
