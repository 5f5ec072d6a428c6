//! Retrieve product snapshots by barcode.
//!
//! The `ProductSource` trait abstracts the food database lookup. Network
//! clients, on-disk dumps and in-memory fixtures all sit behind it.

use thiserror::Error;

use crate::ProductFacts;

/// Errors from [`ProductSource::product`].
#[derive(Debug, Error)]
pub enum SourceError {
    /// The barcode was empty or contained characters other than digits.
    #[error("barcode {barcode:?} must be a non-empty string of digits")]
    InvalidBarcode {
        /// Barcode as supplied by the caller.
        barcode: String,
    },
    /// The backing store could not be read.
    #[error("failed to read product {barcode}: {message}")]
    Unavailable {
        /// Barcode being looked up.
        barcode: String,
        /// Human-readable failure description.
        message: String,
    },
    /// The backing store returned a record that could not be decoded.
    #[error("product {barcode} could not be decoded")]
    Malformed {
        /// Barcode being looked up.
        barcode: String,
        /// Underlying decoding error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Check a barcode before it reaches a backing store.
///
/// # Errors
/// Returns [`SourceError::InvalidBarcode`] when the barcode is empty or holds
/// anything other than ASCII digits.
///
/// # Examples
/// ```
/// use labelwise_core::source::validate_barcode;
///
/// assert!(validate_barcode("3017620422003").is_ok());
/// assert!(validate_barcode("../etc/passwd").is_err());
/// ```
pub fn validate_barcode(barcode: &str) -> Result<(), SourceError> {
    if barcode.is_empty() || !barcode.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(SourceError::InvalidBarcode {
            barcode: barcode.to_owned(),
        });
    }
    Ok(())
}

/// Look up products by barcode.
///
/// Implementations return `Ok(None)` when the barcode is unknown and reserve
/// errors for lookups that could not be completed.
///
/// # Examples
///
/// ```
/// use labelwise_core::{ProductFacts, ProductSource, SourceError};
///
/// struct Pantry;
///
/// impl ProductSource for Pantry {
///     fn product(&self, barcode: &str) -> Result<Option<ProductFacts>, SourceError> {
///         Ok((barcode == "42").then(|| ProductFacts::new("Oats")))
///     }
/// }
///
/// assert!(Pantry.product("42")?.is_some());
/// assert!(Pantry.product("7")?.is_none());
/// # Ok::<(), SourceError>(())
/// ```
pub trait ProductSource {
    /// Return the product registered under `barcode`, if any.
    fn product(&self, barcode: &str) -> Result<Option<ProductFacts>, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::test_support::MemorySource;

    #[rstest]
    #[case("")]
    #[case("12a4")]
    #[case("../7")]
    fn rejects_malformed_barcodes(#[case] barcode: &str) {
        assert!(matches!(
            validate_barcode(barcode),
            Err(SourceError::InvalidBarcode { .. })
        ));
    }

    #[rstest]
    fn memory_source_finds_known_barcode() {
        let source = MemorySource::with_product("123", ProductFacts::new("Oats"));
        let found = source.product("123").expect("lookup succeeds");
        assert_eq!(found.map(|facts| facts.ingredients_text), Some("Oats".into()));
        assert!(source.product("456").expect("lookup succeeds").is_none());
    }

    #[rstest]
    fn memory_source_validates_barcodes() {
        let source = MemorySource::default();
        assert!(source.product("abc").is_err());
    }
}
