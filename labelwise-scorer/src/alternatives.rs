//! Healthier-alternative selection for a scanned product.
//!
//! Fetching candidates belongs to a [`ProductSource`](labelwise_core::ProductSource)
//! or a search backend; this module only derives the search keyword and
//! filters what comes back.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use labelwise_core::{NutrientKey, ProductFacts};

/// Keyword used when no category tag is specific enough.
pub const FALLBACK_KEYWORD: &str = "chips";

/// Maximum number of alternatives returned by [`select_alternatives`].
pub const MAX_ALTERNATIVES: usize = 5;

/// Highest NOVA group an alternative may have.
const MAX_ALTERNATIVE_NOVA: f64 = 2.0;

/// Fragments marking category tags too broad to search on.
const GENERIC_CATEGORY_FRAGMENTS: &[&str] = &["plant", "foods", "beverages"];

/// Pick the search keyword for alternatives from a product's category tags.
///
/// Tags are walked from the most specific (last) to the least specific.
/// Broad tags are skipped, and the language prefix before the first `:`
/// is dropped.
///
/// # Examples
/// ```
/// use labelwise_scorer::alternative_keyword;
///
/// let tags = [
///     "en:plant-based-foods".to_owned(),
///     "en:snacks".to_owned(),
///     "en:crisps".to_owned(),
/// ];
/// assert_eq!(alternative_keyword(&tags), "crisps");
/// assert_eq!(alternative_keyword(&[]), "chips");
/// ```
#[must_use]
pub fn alternative_keyword(category_tags: &[String]) -> String {
    category_tags
        .iter()
        .rev()
        .filter(|tag| {
            !GENERIC_CATEGORY_FRAGMENTS
                .iter()
                .any(|fragment| tag.contains(*fragment))
        })
        .find_map(|tag| tag.split_once(':').map(|(_, keyword)| keyword))
        .filter(|keyword| !keyword.is_empty())
        .unwrap_or(FALLBACK_KEYWORD)
        .to_owned()
}

/// Keep candidates that make a presentable, minimally processed alternative.
///
/// Candidates need a NOVA group of at most 2, a name, an image and a
/// category tag containing `keyword`. At most [`MAX_ALTERNATIVES`] are
/// kept, in input order.
#[must_use]
pub fn select_alternatives<I>(keyword: &str, candidates: I) -> Vec<ProductFacts>
where
    I: IntoIterator<Item = ProductFacts>,
{
    candidates
        .into_iter()
        .filter(|candidate| is_alternative(keyword, candidate))
        .take(MAX_ALTERNATIVES)
        .collect()
}

fn is_alternative(keyword: &str, candidate: &ProductFacts) -> bool {
    let minimally_processed = candidate
        .nutrients
        .reported(NutrientKey::NovaGroup)
        .is_some_and(|nova| nova <= MAX_ALTERNATIVE_NOVA);
    minimally_processed
        && candidate.display_name().is_some()
        && candidate.image_url.is_some()
        && candidate
            .category_tags
            .iter()
            .any(|tag| tag.contains(keyword))
}

/// Hand-picked alternatives keyed by search keyword.
///
/// Used when no searched candidate qualifies. Keys are compared
/// case-insensitively.
///
/// # Examples
/// ```
/// use labelwise_core::ProductFacts;
/// use labelwise_scorer::CuratedAlternatives;
///
/// let curated = CuratedAlternatives::new([(
///     "Chips".to_owned(),
///     vec![ProductFacts::default().with_name("Baked Lentil Chips")],
/// )]);
/// let picked = curated.select_or_curated("chips", Vec::new());
/// assert_eq!(picked.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CuratedAlternatives {
    by_keyword: BTreeMap<String, Vec<ProductFacts>>,
}

impl CuratedAlternatives {
    /// Build the lookup from `(keyword, alternatives)` pairs.
    #[must_use]
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<ProductFacts>)>,
    {
        Self {
            by_keyword: entries
                .into_iter()
                .map(|(keyword, products)| (keyword.to_lowercase(), products))
                .collect(),
        }
    }

    /// Whether no keyword has curated alternatives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_keyword.is_empty()
    }

    /// Curated alternatives for `keyword`, or an empty slice.
    #[must_use]
    pub fn lookup(&self, keyword: &str) -> &[ProductFacts] {
        self.by_keyword
            .get(&keyword.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Run [`select_alternatives`], falling back to the curated entries for
    /// `keyword` when nothing qualifies.
    #[must_use]
    pub fn select_or_curated<I>(&self, keyword: &str, candidates: I) -> Vec<ProductFacts>
    where
        I: IntoIterator<Item = ProductFacts>,
    {
        let selected = select_alternatives(keyword, candidates);
        if selected.is_empty() {
            log::debug!("no searched alternative qualified for '{keyword}'; using curated list");
            self.lookup(keyword).to_vec()
        } else {
            selected
        }
    }
}
