//! FinerWorks Bridge Core - Shared wire types.
//!
//! This crate provides the request and payload types exchanged with the two
//! systems the bridge connects:
//! - Shopify, the storefront that originates orders and receives fulfillments
//! - FinerWorks, the print-on-demand provider that makes and ships products
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Translation
//! between the two shapes lives in the `finerworks-bridge` crate.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and the per-request DTOs for orders, products and tracking

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
