//! One-shot loaders for saved API responses and preference profiles.

use std::collections::BTreeMap;

use camino::Utf8Path;
use labelwise_core::{PreferenceSet, ProductFacts};
use serde::Deserialize;

use crate::{DataError, OffProductResponse, OffSearchResponse, fs::read_json};

/// Load a saved single-product response.
///
/// Returns `Ok(None)` when the response reports the product as not found.
///
/// # Errors
/// Returns [`DataError`] when the file cannot be read or decoded.
pub fn load_product(path: &Utf8Path) -> Result<Option<ProductFacts>, DataError> {
    let response: OffProductResponse = read_json(path)?;
    let facts = response.into_facts();
    if facts.is_none() {
        log::debug!("{path} does not describe a known product");
    }
    Ok(facts)
}

/// Load a saved search response, preserving result order.
///
/// # Errors
/// Returns [`DataError`] when the file cannot be read or decoded.
pub fn load_search_results(path: &Utf8Path) -> Result<Vec<ProductFacts>, DataError> {
    let response: OffSearchResponse = read_json(path)?;
    Ok(response.into_facts())
}

/// Load a preference profile stored as camel-cased booleans.
///
/// Missing flags default to inactive.
///
/// # Errors
/// Returns [`DataError`] when the file cannot be read or decoded.
pub fn load_preferences(path: &Utf8Path) -> Result<PreferenceSet, DataError> {
    read_json(path)
}

/// One hand-picked alternative in a curated list.
///
/// Entries use either the short `name`/`image` keys or the Open Food
/// Facts `product_name`/`image_front_url` keys.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CuratedEntry {
    code: Option<String>,
    #[serde(alias = "product_name")]
    name: Option<String>,
    #[serde(alias = "image_front_url")]
    image: Option<String>,
}

impl From<CuratedEntry> for ProductFacts {
    fn from(entry: CuratedEntry) -> Self {
        Self {
            barcode: entry.code,
            product_name: entry.name,
            image_url: entry.image,
            ..Self::default()
        }
    }
}

/// Load curated alternatives stored as `{keyword: [entry, ...]}`.
///
/// # Errors
/// Returns [`DataError`] when the file cannot be read or decoded.
pub fn load_curated_alternatives(
    path: &Utf8Path,
) -> Result<BTreeMap<String, Vec<ProductFacts>>, DataError> {
    let raw: BTreeMap<String, Vec<CuratedEntry>> = read_json(path)?;
    Ok(raw
        .into_iter()
        .map(|(keyword, entries)| (keyword, entries.into_iter().map(ProductFacts::from).collect()))
        .collect())
}
