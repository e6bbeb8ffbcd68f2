//! Shape translation between Shopify and FinerWorks payloads.
//!
//! Every function here is pure: no I/O, no logging, and the same input always
//! produces the same output.

mod fulfillments;
mod orders;
mod products;

pub use fulfillments::{DEFAULT_CARRIER, fulfillment_create_request};
pub use orders::{finerworks_order, product_details_request};
pub use products::{VENDOR, product_create_request};
