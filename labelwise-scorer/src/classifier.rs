//! Keyword-based ingredient risk classification.
//!
//! Rules form a priority chain: the first rule whose keyword list has a
//! substring match in the lowercased token decides the tier, and tokens no
//! rule matches are [`RiskTier::Clean`].

#![forbid(unsafe_code)]

use std::sync::LazyLock;

use labelwise_core::{IngredientToken, RiskTier};

use crate::tokenizer::tokenize;

/// Keywords marking an ingredient as harmful.
pub const HARMFUL_KEYWORDS: &[&str] = &[
    "palm oil",
    "e250",
    "e251",
    "e621",
    "artificial",
    "preservative",
];

/// Keywords marking an ingredient as suspicious.
pub const MODERATE_KEYWORDS: &[&str] = &[
    "artificial flavor",
    "monosodium glutamate",
    "color",
    "additive",
    "emulsifier",
];

static DEFAULT_CLASSIFIER: LazyLock<RiskClassifier> = LazyLock::new(RiskClassifier::default);

/// One link of the classification chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierRule {
    tier: RiskTier,
    keywords: Vec<String>,
}

impl TierRule {
    /// Build a rule assigning `tier` when any keyword is contained in a token.
    ///
    /// Keywords are lowercased so they compare against lowercased tokens.
    #[must_use]
    pub fn new<I, S>(tier: RiskTier, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tier,
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Tier assigned by this rule.
    #[must_use]
    pub const fn tier(&self) -> RiskTier {
        self.tier
    }

    fn matches(&self, lowered: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
    }
}

/// Ordered chain of [`TierRule`]s.
///
/// # Examples
/// ```
/// use labelwise_core::RiskTier;
/// use labelwise_scorer::RiskClassifier;
///
/// let classifier = RiskClassifier::default();
/// assert_eq!(classifier.classify("Natural Color"), RiskTier::Moderate);
/// assert_eq!(classifier.classify("Artificial Flavor"), RiskTier::Harmful);
/// assert_eq!(classifier.classify("Oats"), RiskTier::Clean);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskClassifier {
    rules: Vec<TierRule>,
}

impl RiskClassifier {
    /// Build a classifier from rules evaluated in order.
    #[must_use]
    pub const fn new(rules: Vec<TierRule>) -> Self {
        Self { rules }
    }

    /// Append a lower-priority rule while returning `self` for chaining.
    #[must_use]
    pub fn with_rule(mut self, rule: TierRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Classify one ingredient token.
    #[must_use]
    pub fn classify(&self, token: &str) -> RiskTier {
        let lowered = token.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map_or(RiskTier::Clean, TierRule::tier)
    }

    /// Classify tokens independently, preserving their order.
    #[must_use]
    pub fn classify_all<I, S>(&self, tokens: I) -> Vec<IngredientToken>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        tokens
            .into_iter()
            .map(|token| {
                let name = token.into();
                let tier = self.classify(&name);
                IngredientToken { name, tier }
            })
            .collect()
    }

    /// Tokenize an ingredient list and classify every token.
    #[must_use]
    pub fn classify_text(&self, text: &str) -> Vec<IngredientToken> {
        self.classify_all(tokenize(text))
    }
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self::new(vec![
            TierRule::new(RiskTier::Harmful, HARMFUL_KEYWORDS),
            TierRule::new(RiskTier::Moderate, MODERATE_KEYWORDS),
        ])
    }
}

/// Classify a token with the default keyword chain.
///
/// # Examples
/// ```
/// use labelwise_core::RiskTier;
///
/// let tier = labelwise_scorer::classify("Palm Oil (contains: soy, antioxidant)");
/// assert_eq!(tier, RiskTier::Harmful);
/// ```
#[must_use]
pub fn classify(token: &str) -> RiskTier {
    DEFAULT_CLASSIFIER.classify(token)
}
