//! Facade crate for the Labelwise food label engine.
//!
//! This crate re-exports the core domain types and exposes the scorer and the
//! Open Food Facts data adapters behind feature flags.

#![forbid(unsafe_code)]

pub use labelwise_core::{
    Analysis, AnalystError, HealthScore, IngredientAnalyst, IngredientToken, MatchPolicy,
    MatchResult, NutrientKey, Nutrients, Preference, PreferenceSet, ProductFacts, ProductSource,
    RiskTier, ScoreBand, Scorer, SourceError,
};

#[cfg(feature = "scorer")]
pub use labelwise_scorer::{
    Assessment, GeneratedTextAnalyst, HealthScoreEngine, PreferenceMatcher, alternative_keyword,
    select_alternatives,
};

#[cfg(feature = "off-data")]
pub use labelwise_data::{DataError, JsonDirectorySource, load_preferences, load_product};
