//! Immutable product snapshots.
//!
//! A [`ProductFacts`] value is everything the scoring and matching engines
//! need about one product. Label tags are normalised on insertion so
//! predicates compare against bare, lowercase tags such as `organic`.

use std::collections::BTreeSet;

use crate::Nutrients;

const LANGUAGE_PREFIX_SEPARATOR: char = ':';

/// Normalise a label tag: lowercase it and strip a leading `en:` prefix.
///
/// Only the English prefix is removed; tags in other languages keep their
/// prefix and therefore never satisfy the English-keyed predicates.
///
/// # Examples
/// ```
/// use labelwise_core::normalise_label_tag;
///
/// assert_eq!(normalise_label_tag("en:Organic"), "organic");
/// assert_eq!(normalise_label_tag("fr:bio"), "fr:bio");
/// ```
#[must_use]
pub fn normalise_label_tag(raw: &str) -> String {
    let lower = raw.to_lowercase();
    match lower.split_once(LANGUAGE_PREFIX_SEPARATOR) {
        Some(("en", rest)) => rest.to_owned(),
        _ => lower,
    }
}

/// Snapshot of one product as consumed by the engines.
///
/// # Examples
/// ```
/// use labelwise_core::{NutrientKey, Nutrients, ProductFacts};
///
/// let facts = ProductFacts::new("Oats, Salt")
///     .with_nutrients(Nutrients::new().with(NutrientKey::Salt, 0.2))
///     .with_label_tags(["en:vegan"]);
/// assert!(facts.has_label("vegan"));
/// assert_eq!(facts.nutrients.salt(), 0.2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProductFacts {
    /// Barcode the product was retrieved by, when known.
    pub barcode: Option<String>,
    /// Display name of the product.
    pub product_name: Option<String>,
    /// Language code reported by the source, e.g. `en`.
    pub language: Option<String>,
    /// Front image URL, used when presenting alternatives.
    pub image_url: Option<String>,
    /// Raw ingredient list as printed on the package.
    pub ingredients_text: String,
    /// Nutrient facts per 100g.
    pub nutrients: Nutrients,
    /// Normalised label tags (`en:` prefix stripped, lowercase).
    pub label_tags: BTreeSet<String>,
    /// Allergen tags exactly as supplied.
    pub allergen_tags: BTreeSet<String>,
    /// Category tags, most specific last.
    pub category_tags: Vec<String>,
}

impl ProductFacts {
    /// Construct facts from an ingredient list with everything else empty.
    #[must_use]
    pub fn new(ingredients_text: impl Into<String>) -> Self {
        Self {
            ingredients_text: ingredients_text.into(),
            ..Self::default()
        }
    }

    /// Replace the nutrient facts.
    #[must_use]
    pub fn with_nutrients(mut self, nutrients: Nutrients) -> Self {
        self.nutrients = nutrients;
        self
    }

    /// Replace the label tags, normalising each one.
    #[must_use]
    pub fn with_label_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.label_tags = tags
            .into_iter()
            .map(|tag| normalise_label_tag(tag.as_ref()))
            .collect();
        self
    }

    /// Replace the allergen tags.
    #[must_use]
    pub fn with_allergen_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allergen_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the category tags, preserving order.
    #[must_use]
    pub fn with_category_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the product name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = Some(name.into());
        self
    }

    /// Set the language code.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the front image URL.
    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Set the barcode.
    #[must_use]
    pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    /// Report whether a normalised label tag is present.
    #[must_use]
    pub fn has_label(&self, tag: &str) -> bool {
        self.label_tags.contains(tag)
    }

    /// Report whether any of the given label tags is present.
    #[must_use]
    pub fn has_any_label(&self, tags: &[&str]) -> bool {
        tags.iter().any(|tag| self.has_label(tag))
    }

    /// Return the product name when it is present and not blank.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.product_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
