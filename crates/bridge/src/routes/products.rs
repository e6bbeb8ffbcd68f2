//! Catalog sync: FinerWorks products → Shopify.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use tracing::{info, instrument};

use crate::conversions::product_create_request;
use crate::error::{AppError, JsonError};
use crate::state::AppState;

/// Create product sync routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/sync-products", get(sync_products))
}

/// Result of a catalog sync.
#[derive(Debug, Serialize)]
pub struct SyncSummary {
    pub message: String,
    /// Number of products created in Shopify.
    pub synced: usize,
}

/// Create every FinerWorks product in Shopify.
///
/// Products are pushed one at a time and the sync stops at the first
/// failure. Products created before the failure are left in place.
#[instrument(skip(state))]
async fn sync_products(State(state): State<AppState>) -> Result<Json<SyncSummary>, JsonError> {
    let products = state
        .finerworks()
        .list_products()
        .await
        .map_err(AppError::FinerWorks)?;

    info!(count = products.len(), "Fetched FinerWorks catalog");

    for product in &products {
        let response = state
            .shopify()
            .create_product(&product_create_request(product))
            .await
            .map_err(AppError::Shopify)?;

        info!(product = %product.name, %response, "Synced product");
    }

    Ok(Json(SyncSummary {
        message: "Products synced from FinerWorks to Shopify".to_string(),
        synced: products.len(),
    }))
}
