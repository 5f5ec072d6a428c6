//! Deduction tables for the health score.
//!
//! [`ScoreRules::default`] reproduces the fixed table the result view has
//! always used. Callers may build their own rules, but the defaults are
//! what every shipped surface scores with.

#![forbid(unsafe_code)]

use labelwise_core::{NutrientKey, Nutrients};

/// Score every product starts from before deductions.
pub const BASE_SCORE: i32 = 100;

/// Keywords identifying refined or industrial oils in raw ingredient text.
pub const UNHEALTHY_OIL_KEYWORDS: &[&str] = &[
    "palm oil",
    "palm kernel oil",
    "canola oil",
    "rapeseed oil",
    "soybean oil",
    "cottonseed oil",
    "corn oil",
    "vegetable oil",
    "hydrogenated",
    "margarine",
];

/// Keywords identifying ultra-processed ingredients in raw ingredient text.
pub const ULTRA_PROCESSED_KEYWORDS: &[&str] = &[
    "high fructose corn syrup",
    "glucose-fructose syrup",
    "glucose syrup",
    "invert sugar",
    "maltodextrin",
    "dextrose",
    "modified starch",
    "hydrolyzed",
    "protein isolate",
    "flavouring",
    "flavoring",
    "aspartame",
    "sucralose",
    "acesulfame",
    "carrageenan",
];

/// Comparison a nutrient value must satisfy for a deduction to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    /// Value strictly greater than the bound.
    Above(f64),
    /// Value greater than or equal to the bound.
    AtLeast(f64),
    /// Value exactly equal to the bound.
    EqualTo(f64),
}

impl Threshold {
    /// Report whether `value` trips the threshold.
    #[must_use]
    #[expect(
        clippy::float_cmp,
        reason = "an unreported estimate is stored as exactly zero"
    )]
    pub fn is_exceeded_by(self, value: f64) -> bool {
        match self {
            Self::Above(bound) => value > bound,
            Self::AtLeast(bound) => value >= bound,
            Self::EqualTo(bound) => value == bound,
        }
    }
}

/// A fixed deduction applied when a nutrient trips its threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientRule {
    /// Nutrient inspected by the rule.
    pub key: NutrientKey,
    /// Condition that triggers the deduction.
    pub threshold: Threshold,
    /// Points removed when the condition holds.
    pub deduction: i32,
}

impl NutrientRule {
    /// Build a rule.
    #[must_use]
    pub const fn new(key: NutrientKey, threshold: Threshold, deduction: i32) -> Self {
        Self {
            key,
            threshold,
            deduction,
        }
    }

    /// Points this rule removes for `nutrients`, zero when it does not fire.
    #[must_use]
    pub fn deduction_for(&self, nutrients: &Nutrients) -> i32 {
        if self.threshold.is_exceeded_by(nutrients.get(self.key)) {
            self.deduction
        } else {
            0
        }
    }
}

/// A keyword list scanned over the raw ingredient text.
///
/// Every keyword present in the text removes `deduction` points once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordPenalty {
    /// Short name used in diagnostics.
    pub name: &'static str,
    /// Lowercase keywords.
    pub keywords: Vec<String>,
    /// Points removed per keyword found.
    pub deduction: i32,
}

impl KeywordPenalty {
    /// Build a penalty list, lowercasing the keywords.
    #[must_use]
    pub fn new<I, S>(name: &'static str, keywords: I, deduction: i32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name,
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.as_ref().to_lowercase())
                .collect(),
            deduction,
        }
    }

    /// Keywords contained in already-lowercased text.
    pub fn hits<'a>(&'a self, lowered: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.keywords
            .iter()
            .map(String::as_str)
            .filter(move |keyword| lowered.contains(keyword))
    }
}

/// Complete deduction table used by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRules {
    /// Nutrient threshold deductions, each applied independently.
    pub nutrients: Vec<NutrientRule>,
    /// Points removed per harmful ingredient token.
    pub harmful_token: i32,
    /// Points removed per moderate ingredient token.
    pub moderate_token: i32,
    /// Keyword lists scanned over the raw ingredient text.
    pub keyword_penalties: Vec<KeywordPenalty>,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            nutrients: vec![
                NutrientRule::new(NutrientKey::Fat, Threshold::Above(25.0), 20),
                NutrientRule::new(NutrientKey::SaturatedFat, Threshold::Above(4.0), 15),
                NutrientRule::new(NutrientKey::Sugars, Threshold::Above(20.0), 20),
                NutrientRule::new(NutrientKey::Salt, Threshold::Above(1.2), 20),
                NutrientRule::new(NutrientKey::EnergyKcal, Threshold::Above(500.0), 10),
                NutrientRule::new(NutrientKey::NovaGroup, Threshold::AtLeast(4.0), 20),
                NutrientRule::new(
                    NutrientKey::FruitsVegetablesEstimate,
                    Threshold::EqualTo(0.0),
                    10,
                ),
            ],
            harmful_token: 10,
            moderate_token: 5,
            keyword_penalties: vec![
                KeywordPenalty::new("unhealthy oils", UNHEALTHY_OIL_KEYWORDS, 7),
                KeywordPenalty::new("ultra-processed", ULTRA_PROCESSED_KEYWORDS, 5),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Threshold::Above(1.2), 1.2, false)]
    #[case(Threshold::Above(1.2), 1.21, true)]
    #[case(Threshold::AtLeast(4.0), 4.0, true)]
    #[case(Threshold::AtLeast(4.0), 3.0, false)]
    #[case(Threshold::EqualTo(0.0), 0.0, true)]
    #[case(Threshold::EqualTo(0.0), 0.5, false)]
    fn thresholds(#[case] threshold: Threshold, #[case] value: f64, #[case] expected: bool) {
        assert_eq!(threshold.is_exceeded_by(value), expected);
    }

    #[rstest]
    fn default_nutrient_rules_cover_every_key() {
        let rules = ScoreRules::default();
        for key in NutrientKey::ALL {
            assert!(
                rules.nutrients.iter().any(|rule| rule.key == key),
                "missing rule for {key}"
            );
        }
    }

    #[rstest]
    fn keyword_hits_are_counted_once_per_keyword() {
        let penalty = KeywordPenalty::new("oils", ["palm oil", "corn oil"], 7);
        let hits: Vec<&str> = penalty.hits("palm oil, palm oil, salt").collect();
        assert_eq!(hits, vec!["palm oil"]);
    }
}
