//! Outcome types for preference matching.

/// How matched preferences decide list membership.
///
/// # Examples
/// ```
/// use labelwise_core::MatchPolicy;
///
/// assert!(MatchPolicy::AnyOf.includes(1, 3));
/// assert!(!MatchPolicy::AllOf.includes(1, 3));
/// assert!(MatchPolicy::AllOf.includes(0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MatchPolicy {
    /// One satisfied active preference is enough.
    #[default]
    AnyOf,
    /// Every active preference must be satisfied.
    AllOf,
}

impl MatchPolicy {
    /// Decide inclusion from the number of satisfied and active preferences.
    ///
    /// A product is always included when no preference is active.
    #[must_use]
    pub const fn includes(self, matched: usize, active: usize) -> bool {
        if active == 0 {
            return true;
        }
        match self {
            Self::AnyOf => matched > 0,
            Self::AllOf => matched >= active,
        }
    }

    /// Return the policy as a kebab-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AnyOf => "any-of",
            Self::AllOf => "all-of",
        }
    }
}

impl std::fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "any-of" | "any" => Ok(Self::AnyOf),
            "all-of" | "all" => Ok(Self::AllOf),
            _ => Err(format!("unknown match policy '{s}'")),
        }
    }
}

/// Result of evaluating one product against one preference set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    /// Whether the product stays in the list.
    pub included: bool,
    /// Badges for the satisfied preferences, in evaluation order.
    pub matched_labels: Vec<String>,
}

impl MatchResult {
    /// Number of satisfied preferences.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.matched_labels.len()
    }
}
