//! Deterministic product evaluation for Labelwise.
//!
//! The crate turns [`ProductFacts`](labelwise_core::ProductFacts) into the
//! values shown to a shopper:
//! - **Ingredient tokenizing** splits a raw ingredient list on top-level
//!   commas, keeping parenthesised sub-ingredients attached to their parent.
//! - **Risk classification** assigns each token a
//!   [`RiskTier`](labelwise_core::RiskTier) through a priority chain of
//!   keyword rules.
//! - **Health scoring** starts at 100 and deducts fixed points for nutrient
//!   thresholds, risky tokens and processing keywords, clamped to `5..=100`.
//!   [`HealthScoreEngine`] implements the
//!   [`Scorer`](labelwise_core::Scorer) trait.
//! - **Preference matching** evaluates the nine dietary preferences and
//!   decides inclusion under a [`MatchPolicy`](labelwise_core::MatchPolicy).
//! - **Alternatives and analysis** pick healthier substitutes from search
//!   results and extract generated ingredient analyses.
//!
//! Every operation is a pure function of its inputs.
//!
//! # Examples
//!
//! ```
//! use labelwise_core::{NutrientKey, Nutrients, ProductFacts, RiskTier};
//! use labelwise_scorer::{HealthScoreEngine, classify, tokenize};
//!
//! let text = "Wheat Flour, Sugar, Palm Oil (contains: soy, antioxidant)";
//! let tokens = tokenize(text);
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(classify("Palm Oil (contains: soy, antioxidant)"), RiskTier::Harmful);
//!
//! let facts = ProductFacts::new(text)
//!     .with_nutrients(Nutrients::new().with(NutrientKey::Salt, 0.1));
//! let assessment = HealthScoreEngine::default().assess(&facts);
//! assert_eq!(assessment.score.value(), 73);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod alternatives;
mod analysis;
mod classifier;
mod engine;
mod error;
mod matcher;
mod rules;
mod tokenizer;
mod verdict;

pub use alternatives::{
    CuratedAlternatives, FALLBACK_KEYWORD, MAX_ALTERNATIVES, alternative_keyword,
    select_alternatives,
};
pub use analysis::{GeneratedTextAnalyst, parse_analysis};
pub use classifier::{HARMFUL_KEYWORDS, MODERATE_KEYWORDS, RiskClassifier, TierRule, classify};
pub use engine::{Assessment, HealthScoreEngine, score};
pub use error::AnalysisError;
pub use matcher::{
    ALL_CATEGORIES, CatalogueQuery, ECO_PACKAGING_TAGS, LOW_SODIUM_MAX_SALT, PreferenceMatcher,
    matches, preference_satisfied,
};
pub use rules::{
    BASE_SCORE, KeywordPenalty, NutrientRule, ScoreRules, Threshold, ULTRA_PROCESSED_KEYWORDS,
    UNHEALTHY_OIL_KEYWORDS,
};
pub use tokenizer::{Tokenization, tokenize, tokenize_report};
pub use verdict::{Level, NutrientVerdict, nutrient_verdicts};
