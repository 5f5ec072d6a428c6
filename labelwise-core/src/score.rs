//! Health scores and their display bands.

/// Aggregate health score, always within
/// [`HealthScore::MIN`]`..=`[`HealthScore::MAX`].
///
/// # Examples
/// ```
/// use labelwise_core::HealthScore;
///
/// assert_eq!(HealthScore::new(-40).value(), 5);
/// assert_eq!(HealthScore::new(140).value(), 100);
/// assert_eq!(HealthScore::new(72).value(), 72);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "i32", from = "i32"))]
pub struct HealthScore {
    value: i32,
}

impl HealthScore {
    /// Lowest reportable score.
    pub const MIN: i32 = 5;
    /// Highest reportable score.
    pub const MAX: i32 = 100;

    /// Clamp a raw score into the reportable range.
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        let value = if raw < Self::MIN {
            Self::MIN
        } else if raw > Self::MAX {
            Self::MAX
        } else {
            raw
        };
        Self { value }
    }

    /// Return the clamped value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.value
    }

    /// Return the display band for this score.
    #[must_use]
    pub const fn band(self) -> ScoreBand {
        ScoreBand::for_value(self.value)
    }
}

impl From<i32> for HealthScore {
    fn from(raw: i32) -> Self {
        Self::new(raw)
    }
}

impl From<HealthScore> for i32 {
    fn from(score: HealthScore) -> Self {
        score.value
    }
}

impl std::fmt::Display for HealthScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.value, Self::MAX)
    }
}

/// Coarse rating used to colour a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScoreBand {
    /// Score of 70 or more.
    Good,
    /// Score from 50 to 69.
    Fair,
    /// Score below 50.
    Poor,
}

impl ScoreBand {
    const GOOD_FLOOR: i32 = 70;
    const FAIR_FLOOR: i32 = 50;

    const fn for_value(value: i32) -> Self {
        if value >= Self::GOOD_FLOOR {
            Self::Good
        } else if value >= Self::FAIR_FLOOR {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Colour name the result view paints the score with.
    #[must_use]
    pub const fn colour(self) -> &'static str {
        match self {
            Self::Good => "green",
            Self::Fair => "orange",
            Self::Poor => "red",
        }
    }
}

impl From<HealthScore> for ScoreBand {
    fn from(score: HealthScore) -> Self {
        score.band()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(i32::MIN, 5)]
    #[case(4, 5)]
    #[case(5, 5)]
    #[case(100, 100)]
    #[case(101, 100)]
    fn clamps_to_range(#[case] raw: i32, #[case] expected: i32) {
        assert_eq!(HealthScore::new(raw).value(), expected);
    }

    #[rstest]
    #[case(70, ScoreBand::Good)]
    #[case(69, ScoreBand::Fair)]
    #[case(50, ScoreBand::Fair)]
    #[case(49, ScoreBand::Poor)]
    fn bands_follow_thresholds(#[case] raw: i32, #[case] band: ScoreBand) {
        assert_eq!(HealthScore::new(raw).band(), band);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialises_as_bare_integer() {
        let json = serde_json::to_string(&HealthScore::new(90)).expect("serialise score");
        assert_eq!(json, "90");
        let decoded: HealthScore = serde_json::from_str("250").expect("decode score");
        assert_eq!(decoded.value(), 100);
    }
}
