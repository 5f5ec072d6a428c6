//! Test-only collaborators used by unit and behaviour tests.

use std::collections::HashMap;

use crate::{
    Analysis, AnalystError, IngredientAnalyst, ProductFacts, ProductSource, SourceError,
    source::validate_barcode,
};

/// In-memory `ProductSource` keyed by barcode.
#[derive(Default, Debug, Clone)]
pub struct MemorySource {
    products: HashMap<String, ProductFacts>,
}

impl MemorySource {
    /// Create a source holding a single product.
    #[must_use]
    pub fn with_product(barcode: impl Into<String>, facts: ProductFacts) -> Self {
        Self::with_products(std::iter::once((barcode.into(), facts)))
    }

    /// Create a source from `(barcode, facts)` pairs.
    #[must_use]
    pub fn with_products<I>(products: I) -> Self
    where
        I: IntoIterator<Item = (String, ProductFacts)>,
    {
        Self {
            products: products.into_iter().collect(),
        }
    }
}

impl ProductSource for MemorySource {
    fn product(&self, barcode: &str) -> Result<Option<ProductFacts>, SourceError> {
        validate_barcode(barcode)?;
        Ok(self.products.get(barcode).cloned())
    }
}

/// Test `IngredientAnalyst` that replays a canned outcome.
#[derive(Debug, Clone)]
pub enum CannedAnalyst {
    /// Always succeed with this analysis.
    Answer(Analysis),
    /// Always fail with a service error carrying this message.
    Outage(String),
}

impl IngredientAnalyst for CannedAnalyst {
    fn analyse(&self, _ingredients: &str) -> Result<Analysis, AnalystError> {
        match self {
            Self::Answer(analysis) => Ok(analysis.clone()),
            Self::Outage(message) => Err(AnalystError::Service {
                message: message.clone(),
            }),
        }
    }
}
