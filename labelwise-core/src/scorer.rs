//! Score products for display.
//!
//! The `Scorer` trait assigns a [`HealthScore`](crate::HealthScore) to a
//! [`ProductFacts`](crate::ProductFacts) snapshot.

use crate::{HealthScore, ProductFacts};

/// Calculate a health score for a product.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so list views can
/// score many products in parallel. The method is infallible; products with
/// no usable information still receive a score.
///
/// Use [`Scorer::sanitise`] to clamp a raw tally into the reportable range.
///
/// # Examples
///
/// ```rust
/// use labelwise_core::{HealthScore, ProductFacts, Scorer};
///
/// struct PerfectScorer;
///
/// impl Scorer for PerfectScorer {
///     fn score(&self, _facts: &ProductFacts) -> HealthScore {
///         Self::sanitise(120)
///     }
/// }
///
/// let facts = ProductFacts::new("Water");
/// assert_eq!(PerfectScorer.score(&facts).value(), 100);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `facts`.
    fn score(&self, facts: &ProductFacts) -> HealthScore;

    /// Clamp a raw tally to `HealthScore::MIN..=HealthScore::MAX`.
    #[must_use]
    fn sanitise(raw: i32) -> HealthScore
    where
        Self: Sized,
    {
        HealthScore::new(raw)
    }
}
