//! Ingredient risk tiers.
//!
//! # Examples
//! ```
//! use labelwise_core::RiskTier;
//!
//! assert_eq!(RiskTier::Harmful.as_str(), "harmful");
//! assert_eq!(RiskTier::Clean.to_string(), "clean");
//! ```

/// Risk assigned to a single ingredient token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RiskTier {
    /// Ingredient matched a harmful keyword.
    Harmful,
    /// Ingredient matched a suspicious keyword.
    Moderate,
    /// No keyword matched.
    Clean,
}

impl RiskTier {
    /// Return the tier as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Harmful => "harmful",
            Self::Moderate => "moderate",
            Self::Clean => "clean",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RiskTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "harmful" => Ok(Self::Harmful),
            "moderate" => Ok(Self::Moderate),
            "clean" => Ok(Self::Clean),
            _ => Err(format!("unknown risk tier '{s}'")),
        }
    }
}

/// One top-level ingredient and its classified tier.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IngredientToken {
    /// Ingredient text as written, including any parenthetical detail.
    pub name: String,
    /// Classified risk tier.
    pub tier: RiskTier,
}

impl IngredientToken {
    /// Pair an ingredient name with its tier.
    #[must_use]
    pub fn new(name: impl Into<String>, tier: RiskTier) -> Self {
        Self {
            name: name.into(),
            tier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(RiskTier::Moderate.to_string(), RiskTier::Moderate.as_str());
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(RiskTier::from_str("Harmful"), Ok(RiskTier::Harmful));
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = RiskTier::from_str("toxic").expect_err("unknown tier");
        assert!(err.contains("unknown risk tier"));
    }
}
