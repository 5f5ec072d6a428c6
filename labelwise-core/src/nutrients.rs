//! Per-100g nutrient facts keyed by [`NutrientKey`].
//!
//! Values are stored as reported by the source. Reads through
//! [`Nutrients::get`] never fail: a missing or non-finite value reads as
//! `0.0` so downstream thresholds stay total.

use std::collections::BTreeMap;

/// Nutrient facts the scoring engine understands.
///
/// The string form mirrors the Open Food Facts `nutriments` keys.
///
/// # Examples
/// ```
/// use labelwise_core::NutrientKey;
///
/// assert_eq!(NutrientKey::SaturatedFat.as_str(), "saturated-fat");
/// assert_eq!("salt".parse::<NutrientKey>(), Ok(NutrientKey::Salt));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum NutrientKey {
    /// Total fat in grams.
    Fat,
    /// Saturated fat in grams.
    SaturatedFat,
    /// Sugars in grams.
    Sugars,
    /// Salt in grams.
    Salt,
    /// Energy in kilocalories.
    EnergyKcal,
    /// NOVA processing group, `1..=4`.
    NovaGroup,
    /// Estimated share of fruits, vegetables and nuts.
    FruitsVegetablesEstimate,
}

impl NutrientKey {
    /// Every key in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Fat,
        Self::SaturatedFat,
        Self::Sugars,
        Self::Salt,
        Self::EnergyKcal,
        Self::NovaGroup,
        Self::FruitsVegetablesEstimate,
    ];

    /// Return the Open Food Facts `nutriments` key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fat => "fat",
            Self::SaturatedFat => "saturated-fat",
            Self::Sugars => "sugars",
            Self::Salt => "salt",
            Self::EnergyKcal => "energy-kcal",
            Self::NovaGroup => "nova-group",
            Self::FruitsVegetablesEstimate => {
                "fruits-vegetables-nuts-estimate-from-ingredients_100g"
            }
        }
    }
}

impl std::fmt::Display for NutrientKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NutrientKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown nutrient '{s}'"))
    }
}

/// Nutrient values for one product.
///
/// # Examples
/// ```
/// use labelwise_core::{NutrientKey, Nutrients};
///
/// let nutrients = Nutrients::new().with(NutrientKey::Salt, 0.4);
/// assert_eq!(nutrients.get(NutrientKey::Salt), 0.4);
/// assert_eq!(nutrients.get(NutrientKey::Sugars), 0.0);
/// assert!(nutrients.reported(NutrientKey::Sugars).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Nutrients {
    values: BTreeMap<NutrientKey, f64>,
}

impl Nutrients {
    /// Construct an empty set of nutrient facts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a value, treating missing or non-finite entries as `0.0`.
    #[must_use]
    pub fn get(&self, key: NutrientKey) -> f64 {
        self.reported(key).unwrap_or(0.0)
    }

    /// Read a value only when the source reported a finite number.
    #[must_use]
    pub fn reported(&self, key: NutrientKey) -> Option<f64> {
        self.values
            .get(&key)
            .copied()
            .filter(|value| value.is_finite())
    }

    /// Insert or replace a value.
    pub fn set(&mut self, key: NutrientKey, value: f64) {
        self.values.insert(key, value);
    }

    /// Insert a value while returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, key: NutrientKey, value: f64) -> Self {
        self.set(key, value);
        self
    }

    /// Total fat per 100g.
    #[must_use]
    pub fn fat(&self) -> f64 {
        self.get(NutrientKey::Fat)
    }

    /// Saturated fat per 100g.
    #[must_use]
    pub fn saturated_fat(&self) -> f64 {
        self.get(NutrientKey::SaturatedFat)
    }

    /// Sugars per 100g.
    #[must_use]
    pub fn sugars(&self) -> f64 {
        self.get(NutrientKey::Sugars)
    }

    /// Salt per 100g.
    #[must_use]
    pub fn salt(&self) -> f64 {
        self.get(NutrientKey::Salt)
    }

    /// Energy per 100g in kilocalories.
    #[must_use]
    pub fn energy_kcal(&self) -> f64 {
        self.get(NutrientKey::EnergyKcal)
    }

    /// NOVA group, `0.0` when unknown.
    #[must_use]
    pub fn nova_group(&self) -> f64 {
        self.get(NutrientKey::NovaGroup)
    }

    /// Fruits, vegetables and nuts estimate.
    #[must_use]
    pub fn fruits_vegetables_estimate(&self) -> f64 {
        self.get(NutrientKey::FruitsVegetablesEstimate)
    }
}

impl FromIterator<(NutrientKey, f64)> for Nutrients {
    fn from_iter<I: IntoIterator<Item = (NutrientKey, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn missing_values_read_as_zero() {
        let nutrients = Nutrients::new();
        for key in NutrientKey::ALL {
            assert_eq!(nutrients.get(key), 0.0);
        }
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn non_finite_values_read_as_zero(#[case] raw: f64) {
        let nutrients = Nutrients::new().with(NutrientKey::Fat, raw);
        assert_eq!(nutrients.fat(), 0.0);
        assert!(nutrients.reported(NutrientKey::Fat).is_none());
    }

    #[rstest]
    fn key_round_trips_through_str() {
        for key in NutrientKey::ALL {
            assert_eq!(NutrientKey::from_str(key.as_str()), Ok(key));
        }
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = NutrientKey::from_str("fibre").expect_err("unknown key");
        assert!(err.contains("unknown nutrient"));
    }
}
