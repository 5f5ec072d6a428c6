//! Nutrient breakdown lines for the result view.
//!
//! These thresholds are for display only and intentionally differ from the
//! scoring deductions.

#![forbid(unsafe_code)]

use labelwise_core::{NutrientKey, Nutrients};
use serde::Serialize;

const SALT_HIGH: f64 = 1.5;
const SUGARS_HIGH: f64 = 20.0;
const FAT_HIGH: f64 = 15.0;

/// Qualitative reading of one nutrient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Above the display threshold.
    High,
    /// Salt at or below the display threshold.
    Acceptable,
    /// Sugars at or below the display threshold.
    Good,
    /// Fat at or below the display threshold.
    Moderate,
}

impl Level {
    /// Return the level as a display `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Acceptable => "Acceptable",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
        }
    }
}

/// One breakdown line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientVerdict {
    /// Nutrient described by the line.
    pub key: NutrientKey,
    /// Amount per 100g, `0.0` when unreported.
    pub amount: f64,
    /// Reading, absent for energy which is shown without one.
    pub level: Option<Level>,
}

/// Build the salt, sugars, fat and energy breakdown lines.
///
/// # Examples
/// ```
/// use labelwise_core::{NutrientKey, Nutrients};
/// use labelwise_scorer::{Level, nutrient_verdicts};
///
/// let lines = nutrient_verdicts(&Nutrients::new().with(NutrientKey::Salt, 2.0));
/// assert_eq!(lines.first().and_then(|line| line.level), Some(Level::High));
/// ```
#[must_use]
pub fn nutrient_verdicts(nutrients: &Nutrients) -> Vec<NutrientVerdict> {
    let salt = nutrients.salt();
    let sugars = nutrients.sugars();
    let fat = nutrients.fat();
    vec![
        NutrientVerdict {
            key: NutrientKey::Salt,
            amount: salt,
            level: Some(if salt > SALT_HIGH {
                Level::High
            } else {
                Level::Acceptable
            }),
        },
        NutrientVerdict {
            key: NutrientKey::Sugars,
            amount: sugars,
            level: Some(if sugars > SUGARS_HIGH {
                Level::High
            } else {
                Level::Good
            }),
        },
        NutrientVerdict {
            key: NutrientKey::Fat,
            amount: fat,
            level: Some(if fat > FAT_HIGH {
                Level::High
            } else {
                Level::Moderate
            }),
        },
        NutrientVerdict {
            key: NutrientKey::EnergyKcal,
            amount: nutrients.energy_kcal(),
            level: None,
        },
    ]
}
