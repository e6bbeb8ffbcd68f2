//! Product types: the FinerWorks catalog record and the Shopify product-create body.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A variant price as FinerWorks sent it.
///
/// Numbers and decimal strings parse as [`Price::Amount`] and serialize as
/// decimal strings. Anything else (`""`, `"$19.99"`) is kept as
/// [`Price::Raw`] and forwarded unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(Decimal),
    Raw(Value),
}

// =============================================================================
// FinerWorks (inbound)
// =============================================================================

/// A product as returned by `GET {base}/products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinerWorksProduct {
    /// Product name.
    pub name: String,
    /// Description (HTML).
    #[serde(default)]
    pub description: Option<String>,
    /// Variants, in catalog order.
    #[serde(default)]
    pub variants: Vec<FinerWorksVariant>,
}

/// A FinerWorks product variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinerWorksVariant {
    pub sku: String,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub option1: Option<String>,
    #[serde(default)]
    pub option2: Option<String>,
    #[serde(default)]
    pub option3: Option<String>,
}

// =============================================================================
// Shopify (outbound)
// =============================================================================

/// Body for `POST /admin/api/{version}/products.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCreateRequest {
    pub product: ProductInput,
}

/// Product fields for the REST create call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    /// Product title.
    pub title: String,
    /// Description (HTML).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    /// Vendor tag shown in the Shopify admin.
    pub vendor: String,
    /// Variants, positionally matching the source product.
    pub variants: Vec<VariantInput>,
}

/// Variant fields for the REST create call.
///
/// Numeric prices serialize as decimal strings, which Shopify accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantInput {
    pub sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option3: Option<String>,
}
