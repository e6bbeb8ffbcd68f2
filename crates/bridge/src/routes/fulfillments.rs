//! FinerWorks tracking webhook handler.

use axum::{Router, body::Bytes, extract::State, http::StatusCode, routing::post};
use finerworks_bridge_core::TrackingUpdate;
use tracing::{info, instrument};

use crate::conversions::fulfillment_create_request;
use crate::error::AppError;
use crate::state::AppState;

/// Create tracking webhook routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/finerworks-update", post(finerworks_update))
}

/// Record a FinerWorks shipment as a Shopify fulfillment.
#[instrument(skip(state, body))]
async fn finerworks_update(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let update: TrackingUpdate = serde_json::from_slice(&body)?;
    info!(
        order_id = %update.order_number,
        tracking_number = %update.tracking_number,
        carrier = ?update.carrier,
        "Update from FinerWorks"
    );

    let request = fulfillment_create_request(&update, state.config().shopify.location_id);
    let response = state
        .shopify()
        .create_fulfillment(update.order_number, &request)
        .await
        .map_err(AppError::Shopify)?;

    info!(order_id = %update.order_number, %response, "Updated Shopify order");

    Ok(StatusCode::OK)
}
