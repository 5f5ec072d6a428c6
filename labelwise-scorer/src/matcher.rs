//! Preference matching for personalised product lists.
//!
//! Each of the nine preferences has a fixed predicate over
//! [`ProductFacts`]. Active preferences are evaluated in
//! [`Preference::ALL`] order; every satisfied one contributes its badge,
//! and the [`MatchPolicy`] turns the tally into an inclusion decision.

#![forbid(unsafe_code)]

use std::sync::LazyLock;

use labelwise_core::{MatchPolicy, MatchResult, Preference, PreferenceSet, ProductFacts};
use regex::Regex;

/// Salt per 100g at or below which a product counts as low sodium.
pub const LOW_SODIUM_MAX_SALT: f64 = 1.2;

/// Label tags accepted as eco-friendly packaging.
pub const ECO_PACKAGING_TAGS: &[&str] = &["fsc", "fsc-recycling", "eco-emballage", "green-dot"];

/// Language code required by [`PreferenceMatcher::filter_products`].
const LISTING_LANGUAGE: &str = "en";

/// Category that disables category filtering in a [`CatalogueQuery`].
pub const ALL_CATEGORIES: &str = "All";

#[expect(
    clippy::expect_used,
    reason = "the pattern is a compile-time literal covered by unit tests"
)]
static E_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)e[0-9]{3}").expect("E-number pattern compiles"));

/// Report whether a preference's predicate holds for `facts`.
///
/// The predicate ignores whether the preference is active.
///
/// # Examples
/// ```
/// use labelwise_core::{Preference, ProductFacts};
/// use labelwise_scorer::preference_satisfied;
///
/// let facts = ProductFacts::new("Sugar, E330").with_label_tags(["en:vegan"]);
/// assert!(preference_satisfied(Preference::PreferVegan, &facts));
/// assert!(preference_satisfied(Preference::HideAdditives, &facts));
/// assert!(!preference_satisfied(Preference::PreferOrganic, &facts));
/// ```
#[must_use]
pub fn preference_satisfied(preference: Preference, facts: &ProductFacts) -> bool {
    match preference {
        Preference::PreferOrganic => facts.has_label("organic"),
        Preference::PreferVegan => facts.has_label("vegan"),
        Preference::HideAdditives => {
            facts.has_label("no-additives") || E_NUMBER.is_match(&facts.ingredients_text)
        }
        Preference::NoGmos => facts.has_any_label(&["no-gmos", "non-gmo-project"]),
        Preference::NoAddedSugar => facts.has_label("no-added-sugar"),
        Preference::NoPreservatives => facts.has_label("no-preservatives"),
        Preference::AvoidSodium => facts.nutrients.salt() <= LOW_SODIUM_MAX_SALT,
        Preference::EcoPackaging => facts.has_any_label(ECO_PACKAGING_TAGS),
        Preference::AvoidAllergens => facts.allergen_tags.is_empty(),
    }
}

/// Evaluates products against a user's preferences.
///
/// # Examples
/// ```
/// use labelwise_core::{Preference, PreferenceSet, ProductFacts};
/// use labelwise_scorer::PreferenceMatcher;
///
/// let prefs = PreferenceSet::default().with(Preference::PreferVegan);
/// let facts = ProductFacts::new("Oats").with_label_tags(["en:vegan"]);
/// let result = PreferenceMatcher::default().matches(&facts, &prefs);
/// assert!(result.included);
/// assert_eq!(result.matched_labels, ["Vegan"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreferenceMatcher {
    policy: MatchPolicy,
}

impl PreferenceMatcher {
    /// Build a matcher with an explicit inclusion policy.
    #[must_use]
    pub const fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    /// Inclusion policy in use.
    #[must_use]
    pub const fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Evaluate `facts` against the active preferences in `prefs`.
    #[must_use]
    pub fn matches(&self, facts: &ProductFacts, prefs: &PreferenceSet) -> MatchResult {
        let matched_labels: Vec<String> = prefs
            .active()
            .filter(|preference| preference_satisfied(*preference, facts))
            .map(|preference| preference.label().to_owned())
            .collect();
        let included = self
            .policy
            .includes(matched_labels.len(), prefs.active_count());
        MatchResult {
            included,
            matched_labels,
        }
    }

    /// Keep listable products that satisfy `prefs`, in input order.
    ///
    /// A product is listable when it has a name and is tagged as English.
    #[must_use]
    pub fn filter_products<'a, I>(
        &self,
        products: I,
        prefs: &PreferenceSet,
    ) -> Vec<(&'a ProductFacts, MatchResult)>
    where
        I: IntoIterator<Item = &'a ProductFacts>,
    {
        products
            .into_iter()
            .filter(|facts| is_listable(facts))
            .map(|facts| (facts, self.matches(facts, prefs)))
            .filter(|(_, result)| result.included)
            .collect()
    }
}

fn is_listable(facts: &ProductFacts) -> bool {
    facts.display_name().is_some() && facts.language.as_deref() == Some(LISTING_LANGUAGE)
}

/// Evaluate `facts` with the default any-of policy.
#[must_use]
pub fn matches(facts: &ProductFacts, prefs: &PreferenceSet) -> MatchResult {
    PreferenceMatcher::default().matches(facts, prefs)
}

/// Free-text search and category chip applied to a product list.
///
/// # Examples
/// ```
/// use labelwise_core::ProductFacts;
/// use labelwise_scorer::CatalogueQuery;
///
/// let query = CatalogueQuery::new("oat", "All");
/// assert!(query.accepts(&ProductFacts::new("").with_name("Organic Oat Drink")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogueQuery {
    search: String,
    category: Option<String>,
}

impl CatalogueQuery {
    /// Build a query; the `All` category disables category filtering.
    #[must_use]
    pub fn new(search: impl Into<String>, category: impl Into<String>) -> Self {
        let chosen = category.into();
        Self {
            search: search.into().to_lowercase(),
            category: (chosen != ALL_CATEGORIES).then(|| chosen.to_lowercase()),
        }
    }

    /// Report whether the product name satisfies both search and category.
    #[must_use]
    pub fn accepts(&self, facts: &ProductFacts) -> bool {
        let title = facts
            .product_name
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default();
        let matches_search = title.contains(self.search.as_str());
        let matches_category = self
            .category
            .as_deref()
            .is_none_or(|category| title.contains(category));
        matches_search && matches_category
    }
}
