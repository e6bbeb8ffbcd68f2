//! FinerWorks Bridge library.
//!
//! Webhook middleware that keeps a Shopify store and the FinerWorks
//! print-on-demand service in sync:
//! - FinerWorks catalog → Shopify products (`GET /sync-products`)
//! - Shopify orders → FinerWorks orders (`POST /shopify-order-created`)
//! - FinerWorks shipments → Shopify fulfillments (`POST /finerworks-update`)
//!
//! Each request is handled on its own with one outbound call chain. Nothing is
//! stored, queued, retried, or deduplicated.
//!
//! # Security
//!
//! Shopify order webhooks are always HMAC verified against the raw request
//! body before they are parsed. This crate holds the Shopify Admin API token
//! and both FinerWorks keys.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod conversions;
pub mod error;
pub mod finerworks;
pub mod middleware;
pub mod routes;
pub mod shopify;
pub mod state;
pub mod upstream;
pub mod webhook;
