//! Optional ingredient analysis from an external language model.
//!
//! The analysis never feeds the health score. It only adds free-text
//! positives and warnings to the result view.

use thiserror::Error;

const FALLBACK_WARNING: &str = "Failed to analyze ingredients.";

/// Positives and warnings reported for an ingredient list.
///
/// # Examples
/// ```
/// use labelwise_core::Analysis;
///
/// let fallback = Analysis::fallback();
/// assert!(fallback.positives.is_empty());
/// assert_eq!(fallback.warnings.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analysis {
    /// Favourable observations.
    pub positives: Vec<String>,
    /// Concerns worth surfacing.
    pub warnings: Vec<String>,
}

impl Analysis {
    /// Analysis shown when the collaborator could not produce one.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            positives: Vec::new(),
            warnings: vec![FALLBACK_WARNING.to_owned()],
        }
    }
}

/// Errors from [`IngredientAnalyst::analyse`].
#[derive(Debug, Error)]
pub enum AnalystError {
    /// The analysis service could not be reached or refused the request.
    #[error("ingredient analysis service failed: {message}")]
    Service {
        /// Human-readable failure description.
        message: String,
    },
    /// The service answered but no analysis could be extracted.
    #[error("ingredient analysis response was unusable")]
    Response {
        /// Underlying extraction error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Produce an [`Analysis`] for raw ingredient text.
///
/// # Examples
///
/// ```
/// use labelwise_core::{Analysis, AnalystError, IngredientAnalyst};
///
/// struct Silent;
///
/// impl IngredientAnalyst for Silent {
///     fn analyse(&self, _ingredients: &str) -> Result<Analysis, AnalystError> {
///         Ok(Analysis::default())
///     }
/// }
///
/// let analysis = Silent.analyse_or_fallback("Sugar");
/// assert!(analysis.warnings.is_empty());
/// ```
pub trait IngredientAnalyst {
    /// Analyse `ingredients`.
    fn analyse(&self, ingredients: &str) -> Result<Analysis, AnalystError>;

    /// Analyse `ingredients`, degrading to [`Analysis::fallback`] on error.
    fn analyse_or_fallback(&self, ingredients: &str) -> Analysis {
        self.analyse(ingredients).unwrap_or_else(|err| {
            log::warn!("ingredient analysis failed: {err}");
            Analysis::fallback()
        })
    }
}
