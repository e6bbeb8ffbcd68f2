//! FinerWorks product → Shopify product-create conversion.

use finerworks_bridge_core::{
    FinerWorksProduct, FinerWorksVariant, ProductCreateRequest, ProductInput, VariantInput,
};

/// Vendor tag set on every product created by the bridge.
pub const VENDOR: &str = "FinerWorks";

/// Build the Shopify create-product body for a FinerWorks product.
#[must_use]
pub fn product_create_request(product: &FinerWorksProduct) -> ProductCreateRequest {
    ProductCreateRequest {
        product: ProductInput {
            title: product.name.clone(),
            body_html: product.description.clone(),
            vendor: VENDOR.to_string(),
            variants: product.variants.iter().map(convert_variant).collect(),
        },
    }
}

fn convert_variant(variant: &FinerWorksVariant) -> VariantInput {
    VariantInput {
        sku: variant.sku.clone(),
        price: variant.price.clone(),
        option1: variant.option1.clone(),
        option2: variant.option2.clone(),
        option3: variant.option3.clone(),
    }
}
