//! Error types raised while extracting an ingredient analysis.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised by [`parse_analysis`](crate::parse_analysis).
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The generated text contained no `{...}` block at all.
    #[error("generated text contains no JSON object")]
    NoJsonBlock,
    /// No block mentioned both `positives` and `warnings`.
    #[error("no JSON object carries both \"positives\" and \"warnings\"")]
    MissingFields,
    /// The candidate block was not valid JSON.
    #[error("failed to decode analysis JSON")]
    Decode {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A field was present but not an array of strings.
    #[error("analysis field '{field}' is not an array of strings")]
    InvalidShape {
        /// Name of the offending field.
        field: &'static str,
    },
}
