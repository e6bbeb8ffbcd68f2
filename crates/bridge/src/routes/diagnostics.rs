//! Liveness and diagnostic endpoints.

use axum::{Json, Router, extract::State, routing::get};
use serde_json::Value;
use tracing::instrument;

use crate::conversions::product_details_request;
use crate::error::{AppError, JsonError};
use crate::state::AppState;

/// SKU looked up by `/test-finerworks`.
pub const DIAGNOSTIC_SKU: &str = "AP98520P583742";

/// Create liveness and diagnostic routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/test-finerworks", get(test_finerworks))
}

async fn index() -> &'static str {
    "Shopify <-> FinerWorks middleware is running"
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Fetch FinerWorks product details for [`DIAGNOSTIC_SKU`] and return them raw.
#[instrument(skip(state))]
async fn test_finerworks(State(state): State<AppState>) -> Result<Json<Value>, JsonError> {
    let details = state
        .finerworks()
        .product_details(&product_details_request(&[DIAGNOSTIC_SKU]))
        .await
        .map_err(AppError::FinerWorks)?;

    Ok(Json(details))
}
