//! Health scoring that combines nutrient thresholds with ingredient risk.
//!
//! A score starts at [`BASE_SCORE`](crate::rules::BASE_SCORE) and loses
//! fixed points for each nutrient threshold tripped, for each harmful or
//! moderate ingredient token, and for each unhealthy-oil or ultra-processed
//! keyword found in the raw ingredient text. The result is clamped into
//! `5..=100`.

#![forbid(unsafe_code)]

use labelwise_core::{
    HealthScore, IngredientToken, ProductFacts, RiskTier, ScoreBand, Scorer,
};

use crate::{
    classifier::RiskClassifier,
    rules::{BASE_SCORE, ScoreRules},
    verdict::{NutrientVerdict, nutrient_verdicts},
};

/// Full result-view payload for one product.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Assessment {
    /// Classified ingredients in source order.
    pub ingredients: Vec<IngredientToken>,
    /// Clamped health score.
    pub score: HealthScore,
    /// Display band for the score.
    pub band: ScoreBand,
    /// Nutrient breakdown lines.
    pub nutrients: Vec<NutrientVerdict>,
}

/// Deterministic health scorer.
///
/// # Examples
/// ```
/// use labelwise_core::{NutrientKey, Nutrients, ProductFacts};
/// use labelwise_scorer::HealthScoreEngine;
///
/// let facts = ProductFacts::new("").with_nutrients(
///     Nutrients::new()
///         .with(NutrientKey::Salt, 0.1)
///         .with(NutrientKey::Sugars, 0.0),
/// );
/// let engine = HealthScoreEngine::default();
/// assert_eq!(engine.score_tokens(&facts, &[]).value(), 90);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HealthScoreEngine {
    classifier: RiskClassifier,
    rules: ScoreRules,
}

impl HealthScoreEngine {
    /// Build an engine from a classifier and a deduction table.
    #[must_use]
    pub const fn new(classifier: RiskClassifier, rules: ScoreRules) -> Self {
        Self { classifier, rules }
    }

    /// Classifier used to derive tokens in [`Scorer::score`] and [`Self::assess`].
    #[must_use]
    pub const fn classifier(&self) -> &RiskClassifier {
        &self.classifier
    }

    /// Deduction table in use.
    #[must_use]
    pub const fn rules(&self) -> &ScoreRules {
        &self.rules
    }

    /// Score `facts` given tokens already classified by the caller.
    #[must_use]
    pub fn score_tokens(&self, facts: &ProductFacts, tokens: &[IngredientToken]) -> HealthScore {
        let raw = BASE_SCORE
            .saturating_sub(self.nutrient_deductions(facts))
            .saturating_sub(self.token_deductions(tokens))
            .saturating_sub(self.keyword_deductions(&facts.ingredients_text));
        <Self as Scorer>::sanitise(raw)
    }

    /// Classify the ingredient list, score it and build the nutrient breakdown.
    #[must_use]
    pub fn assess(&self, facts: &ProductFacts) -> Assessment {
        let ingredients = self.classifier.classify_text(&facts.ingredients_text);
        let score = self.score_tokens(facts, &ingredients);
        Assessment {
            ingredients,
            score,
            band: score.band(),
            nutrients: nutrient_verdicts(&facts.nutrients),
        }
    }

    fn nutrient_deductions(&self, facts: &ProductFacts) -> i32 {
        self.rules
            .nutrients
            .iter()
            .map(|rule| rule.deduction_for(&facts.nutrients))
            .fold(0_i32, i32::saturating_add)
    }

    fn token_deductions(&self, tokens: &[IngredientToken]) -> i32 {
        tokens
            .iter()
            .map(|token| match token.tier {
                RiskTier::Harmful => self.rules.harmful_token,
                RiskTier::Moderate => self.rules.moderate_token,
                RiskTier::Clean => 0,
            })
            .fold(0_i32, i32::saturating_add)
    }

    fn keyword_deductions(&self, ingredients_text: &str) -> i32 {
        let lowered = ingredients_text.to_lowercase();
        let mut total = 0_i32;
        for penalty in &self.rules.keyword_penalties {
            for keyword in penalty.hits(&lowered) {
                log::debug!("{} keyword '{keyword}' found in ingredients", penalty.name);
                total = total.saturating_add(penalty.deduction);
            }
        }
        total
    }
}

impl Scorer for HealthScoreEngine {
    fn score(&self, facts: &ProductFacts) -> HealthScore {
        let tokens = self.classifier.classify_text(&facts.ingredients_text);
        self.score_tokens(facts, &tokens)
    }
}

/// Score `facts` and `tokens` with the default rules.
///
/// # Examples
/// ```
/// use labelwise_core::ProductFacts;
///
/// let facts = ProductFacts::new("");
/// assert_eq!(labelwise_scorer::score(&facts, &[]).value(), 90);
/// ```
#[must_use]
pub fn score(facts: &ProductFacts, tokens: &[IngredientToken]) -> HealthScore {
    HealthScoreEngine::default().score_tokens(facts, tokens)
}
