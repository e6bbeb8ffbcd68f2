//! Core types for the bridge.
//!
//! Every type here is a transient DTO: built from one inbound payload and
//! dropped once the matching outbound call completes.

pub mod id;
pub mod order;
pub mod product;
pub mod tracking;

pub use id::*;
pub use order::{FinerWorksOrder, LineItem, OrderItem, ProductDetailsItem, StorefrontOrder};
pub use product::{
    FinerWorksProduct, FinerWorksVariant, Price, ProductCreateRequest, ProductInput, VariantInput,
};
pub use tracking::{FulfillmentCreateRequest, FulfillmentInput, TrackingUpdate};
