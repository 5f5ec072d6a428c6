//! Open Food Facts response types.
//!
//! The product endpoint wraps a single product in a `{status, product}`
//! envelope; the search endpoint returns `{products: [...]}`. Both are
//! decoded leniently: every field is optional, and nutriment values may be
//! numbers or numeric strings.

use std::collections::BTreeMap;

use labelwise_core::{NutrientKey, Nutrients, ProductFacts};
use serde::Deserialize;
use serde_json::Value;

/// Envelope status reported for a known product.
pub const STATUS_FOUND: i64 = 1;

/// Single-product API response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OffProductResponse {
    /// `1` when the product was found, `0` otherwise.
    #[serde(default)]
    pub status: i64,
    /// Product payload, absent for unknown barcodes.
    #[serde(default)]
    pub product: Option<OffProduct>,
}

impl OffProductResponse {
    /// Convert into [`ProductFacts`], or `None` when the product was not found.
    #[must_use]
    pub fn into_facts(self) -> Option<ProductFacts> {
        if self.status != STATUS_FOUND {
            return None;
        }
        self.product.map(ProductFacts::from)
    }
}

/// Search API response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OffSearchResponse {
    /// Matching products in ranking order.
    #[serde(default)]
    pub products: Vec<OffProduct>,
}

impl OffSearchResponse {
    /// Convert every product into [`ProductFacts`], preserving order.
    #[must_use]
    pub fn into_facts(self) -> Vec<ProductFacts> {
        self.products.into_iter().map(ProductFacts::from).collect()
    }
}

/// Product record shared by both endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OffProduct {
    /// Barcode.
    pub code: Option<String>,
    /// Display name.
    pub product_name: Option<String>,
    /// Main language code.
    pub lang: Option<String>,
    /// Front image used on the result view.
    pub image_front_url: Option<String>,
    /// Smaller front image used in search listings.
    pub image_front_small_url: Option<String>,
    /// Raw printed ingredient list.
    pub ingredients_text: Option<String>,
    /// Nutriment values keyed by Open Food Facts field name.
    pub nutriments: Option<BTreeMap<String, Value>>,
    /// Top-level NOVA group copy.
    pub nova_group: Option<Value>,
    /// Label tags such as `en:vegan`.
    pub labels_tags: Option<Vec<String>>,
    /// Allergen tags.
    pub allergens_tags: Option<Vec<String>>,
    /// Category tags from least to most specific.
    pub categories_tags: Option<Vec<String>>,
}

impl OffProduct {
    fn nutrients(&self) -> Nutrients {
        let mut nutrients = Nutrients::new();
        for key in NutrientKey::ALL {
            let reported = self
                .nutriments
                .as_ref()
                .and_then(|values| values.get(key.as_str()))
                .and_then(numeric);
            let value = match key {
                NutrientKey::NovaGroup => {
                    reported.or_else(|| self.nova_group.as_ref().and_then(numeric))
                }
                _ => reported,
            };
            if let Some(amount) = value {
                nutrients.set(key, amount);
            }
        }
        nutrients
    }
}

/// Read a JSON number or numeric string as a finite `f64`.
fn numeric(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|amount| amount.is_finite())
}

impl From<OffProduct> for ProductFacts {
    fn from(product: OffProduct) -> Self {
        let nutrients = product.nutrients();
        let image_url = product
            .image_front_url
            .or(product.image_front_small_url);
        Self {
            barcode: product.code,
            product_name: product.product_name,
            language: product.lang,
            image_url,
            ingredients_text: product.ingredients_text.unwrap_or_default(),
            nutrients,
            ..Self::default()
        }
        .with_label_tags(product.labels_tags.unwrap_or_default())
        .with_allergen_tags(product.allergens_tags.unwrap_or_default())
        .with_category_tags(product.categories_tags.unwrap_or_default())
    }
}
