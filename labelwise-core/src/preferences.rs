//! User preference flags.
//!
//! The profile store holds nine named booleans. They are modelled as an
//! explicit struct so every flag has a compile-time predicate, plus a
//! [`Preference`] enum for iterating the active ones in a fixed order.

/// One named preference flag.
///
/// # Examples
/// ```
/// use labelwise_core::Preference;
///
/// assert_eq!(Preference::AvoidSodium.key(), "avoidSodium");
/// assert_eq!(Preference::AvoidSodium.label(), "Low Sodium");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preference {
    /// Prefer products carrying an organic label.
    PreferOrganic,
    /// Prefer products carrying a vegan label.
    PreferVegan,
    /// Flag products with additive information.
    HideAdditives,
    /// Prefer GMO-free products.
    NoGmos,
    /// Prefer products without added sugar.
    NoAddedSugar,
    /// Prefer products without preservatives.
    NoPreservatives,
    /// Prefer low-salt products.
    AvoidSodium,
    /// Prefer products with eco-friendly packaging labels.
    EcoPackaging,
    /// Prefer products declaring no allergens.
    AvoidAllergens,
}

impl Preference {
    /// Every preference in evaluation order.
    pub const ALL: [Self; 9] = [
        Self::PreferOrganic,
        Self::PreferVegan,
        Self::HideAdditives,
        Self::NoGmos,
        Self::NoAddedSugar,
        Self::NoPreservatives,
        Self::AvoidSodium,
        Self::EcoPackaging,
        Self::AvoidAllergens,
    ];

    /// Every preference in the order the "Filtered by" chips are shown.
    pub const DISPLAY_ORDER: [Self; 9] = [
        Self::PreferOrganic,
        Self::PreferVegan,
        Self::AvoidSodium,
        Self::HideAdditives,
        Self::NoGmos,
        Self::NoAddedSugar,
        Self::NoPreservatives,
        Self::EcoPackaging,
        Self::AvoidAllergens,
    ];

    /// Key used by the profile store.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::PreferOrganic => "preferOrganic",
            Self::PreferVegan => "preferVegan",
            Self::HideAdditives => "hideAdditives",
            Self::NoGmos => "noGmos",
            Self::NoAddedSugar => "noAddedSugar",
            Self::NoPreservatives => "noPreservatives",
            Self::AvoidSodium => "avoidSodium",
            Self::EcoPackaging => "ecoPackaging",
            Self::AvoidAllergens => "avoidAllergens",
        }
    }

    /// Badge shown when a product satisfies this preference.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PreferOrganic => "Organic",
            Self::PreferVegan => "Vegan",
            Self::HideAdditives => "No Additives",
            Self::NoGmos => "Non-GMO",
            Self::NoAddedSugar => "No Added Sugar",
            Self::NoPreservatives => "No Preservatives",
            Self::AvoidSodium => "Low Sodium",
            Self::EcoPackaging => "Eco-Friendly",
            Self::AvoidAllergens => "Allergen-Free",
        }
    }

    /// Chip shown in the list header while this preference filters results.
    #[must_use]
    pub const fn filter_label(self) -> &'static str {
        match self {
            Self::NoGmos => "No GMOs",
            other => other.label(),
        }
    }
}

impl std::fmt::Display for Preference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Preference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pref| pref.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown preference '{s}'"))
    }
}

/// The user's nine boolean preference flags.
///
/// Missing keys deserialise as `false`.
///
/// # Examples
/// ```
/// use labelwise_core::{Preference, PreferenceSet};
///
/// let prefs = PreferenceSet::default().with(Preference::PreferVegan);
/// assert_eq!(prefs.active_count(), 1);
/// assert!(prefs.is_active(Preference::PreferVegan));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
#[expect(
    clippy::struct_excessive_bools,
    reason = "the profile store persists exactly these nine independent flags"
)]
pub struct PreferenceSet {
    /// Prefer organic products.
    pub prefer_organic: bool,
    /// Prefer vegan products.
    pub prefer_vegan: bool,
    /// Flag products with additive information.
    pub hide_additives: bool,
    /// Prefer GMO-free products.
    pub no_gmos: bool,
    /// Prefer products without added sugar.
    pub no_added_sugar: bool,
    /// Prefer products without preservatives.
    pub no_preservatives: bool,
    /// Prefer low-salt products.
    pub avoid_sodium: bool,
    /// Prefer eco-friendly packaging.
    pub eco_packaging: bool,
    /// Prefer allergen-free products.
    pub avoid_allergens: bool,
}

impl PreferenceSet {
    /// Report whether a preference is switched on.
    #[must_use]
    pub const fn is_active(&self, preference: Preference) -> bool {
        match preference {
            Preference::PreferOrganic => self.prefer_organic,
            Preference::PreferVegan => self.prefer_vegan,
            Preference::HideAdditives => self.hide_additives,
            Preference::NoGmos => self.no_gmos,
            Preference::NoAddedSugar => self.no_added_sugar,
            Preference::NoPreservatives => self.no_preservatives,
            Preference::AvoidSodium => self.avoid_sodium,
            Preference::EcoPackaging => self.eco_packaging,
            Preference::AvoidAllergens => self.avoid_allergens,
        }
    }

    /// Switch a preference on or off.
    pub const fn set(&mut self, preference: Preference, enabled: bool) {
        let flag = match preference {
            Preference::PreferOrganic => &mut self.prefer_organic,
            Preference::PreferVegan => &mut self.prefer_vegan,
            Preference::HideAdditives => &mut self.hide_additives,
            Preference::NoGmos => &mut self.no_gmos,
            Preference::NoAddedSugar => &mut self.no_added_sugar,
            Preference::NoPreservatives => &mut self.no_preservatives,
            Preference::AvoidSodium => &mut self.avoid_sodium,
            Preference::EcoPackaging => &mut self.eco_packaging,
            Preference::AvoidAllergens => &mut self.avoid_allergens,
        };
        *flag = enabled;
    }

    /// Switch a preference on while returning `self` for chaining.
    #[must_use]
    pub const fn with(mut self, preference: Preference) -> Self {
        self.set(preference, true);
        self
    }

    /// Iterate over active preferences in evaluation order.
    pub fn active(&self) -> impl Iterator<Item = Preference> + '_ {
        Preference::ALL
            .into_iter()
            .filter(|preference| self.is_active(*preference))
    }

    /// Number of active preferences.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Labels of the active preferences in display order.
    #[must_use]
    pub fn active_filter_labels(&self) -> Vec<&'static str> {
        Preference::DISPLAY_ORDER
            .into_iter()
            .filter(|preference| self.is_active(*preference))
            .map(Preference::filter_label)
            .collect()
    }
}

impl FromIterator<Preference> for PreferenceSet {
    fn from_iter<I: IntoIterator<Item = Preference>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), Self::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn default_set_is_inactive() {
        let prefs = PreferenceSet::default();
        assert_eq!(prefs.active_count(), 0);
        assert!(prefs.active_filter_labels().is_empty());
    }

    #[rstest]
    fn set_and_read_every_flag() {
        for preference in Preference::ALL {
            let mut prefs = PreferenceSet::default();
            prefs.set(preference, true);
            assert!(prefs.is_active(preference));
            assert_eq!(prefs.active().collect::<Vec<_>>(), vec![preference]);
            prefs.set(preference, false);
            assert_eq!(prefs.active_count(), 0);
        }
    }

    #[rstest]
    fn filter_labels_follow_display_order() {
        let prefs: PreferenceSet = [
            Preference::AvoidAllergens,
            Preference::NoGmos,
            Preference::AvoidSodium,
            Preference::PreferOrganic,
        ]
        .into_iter()
        .collect();
        assert_eq!(
            prefs.active_filter_labels(),
            vec!["Organic", "Low Sodium", "No GMOs", "Allergen-Free"]
        );
    }

    #[rstest]
    #[case("preferVegan", Preference::PreferVegan)]
    #[case("avoidsodium", Preference::AvoidSodium)]
    fn parses_profile_keys(#[case] raw: &str, #[case] expected: Preference) {
        assert_eq!(Preference::from_str(raw), Ok(expected));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn missing_keys_deserialise_as_false() {
        let prefs: PreferenceSet =
            serde_json::from_str(r#"{"preferVegan": true, "ecoPackaging": false}"#)
                .expect("decode preferences");
        assert_eq!(prefs, PreferenceSet::default().with(Preference::PreferVegan));
    }
}
