//! Core domain types for the Labelwise engine.
//!
//! The crate models a scanned food product as an immutable
//! [`ProductFacts`] snapshot, the per-ingredient [`RiskTier`] outcome, the
//! clamped [`HealthScore`], and the user's [`PreferenceSet`]. It also
//! declares the seams to external collaborators: [`Scorer`] for health
//! scoring, [`ProductSource`] for product retrieval and
//! [`IngredientAnalyst`] for the optional AI enrichment.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod analysis;
pub mod matching;
pub mod nutrients;
pub mod preferences;
pub mod product;
pub mod risk;
pub mod score;
pub mod scorer;
pub mod source;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use analysis::{Analysis, AnalystError, IngredientAnalyst};
pub use matching::{MatchPolicy, MatchResult};
pub use nutrients::{NutrientKey, Nutrients};
pub use preferences::{Preference, PreferenceSet};
pub use product::{ProductFacts, normalise_label_tag};
pub use risk::{IngredientToken, RiskTier};
pub use score::{HealthScore, ScoreBand};
pub use scorer::Scorer;
pub use source::{ProductSource, SourceError};
