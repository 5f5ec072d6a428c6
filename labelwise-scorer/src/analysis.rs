//! Extraction of ingredient analyses from generated text.
//!
//! Language models tend to wrap the requested JSON in prose or repeat the
//! prompt's example object. The last `{...}` block naming both
//! `positives` and `warnings` is taken as the answer.

#![forbid(unsafe_code)]

use std::sync::LazyLock;

use labelwise_core::{Analysis, AnalystError, IngredientAnalyst};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::AnalysisError;

const POSITIVES: &str = "positives";
const WARNINGS: &str = "warnings";

#[expect(
    clippy::expect_used,
    reason = "the pattern is a compile-time literal covered by unit tests"
)]
static JSON_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[\s\S]*?\}").expect("JSON block pattern compiles"));

#[derive(Debug, Deserialize)]
struct RawAnalysis {
    positives: Value,
    warnings: Value,
}

/// Parse an [`Analysis`] out of free-form generated text.
///
/// # Errors
/// Returns [`AnalysisError`] when no suitable block exists, when the block
/// is not JSON, or when either field is not an array of strings.
///
/// # Examples
/// ```
/// use labelwise_scorer::parse_analysis;
///
/// let text = r#"Sure! {"positives": ["Whole grains"], "warnings": []} Hope that helps."#;
/// let analysis = parse_analysis(text).expect("analysis parses");
/// assert_eq!(analysis.positives, ["Whole grains"]);
/// assert!(analysis.warnings.is_empty());
/// ```
pub fn parse_analysis(text: &str) -> Result<Analysis, AnalysisError> {
    let blocks: Vec<&str> = JSON_BLOCK.find_iter(text).map(|m| m.as_str()).collect();
    if blocks.is_empty() {
        return Err(AnalysisError::NoJsonBlock);
    }
    let block = blocks
        .iter()
        .rev()
        .find(|block| {
            block.contains(&format!("\"{POSITIVES}\""))
                && block.contains(&format!("\"{WARNINGS}\""))
        })
        .ok_or(AnalysisError::MissingFields)?;
    let raw: RawAnalysis =
        serde_json::from_str(block).map_err(|source| AnalysisError::Decode { source })?;
    Ok(Analysis {
        positives: string_array(raw.positives, POSITIVES)?,
        warnings: string_array(raw.warnings, WARNINGS)?,
    })
}

fn string_array(value: Value, field: &'static str) -> Result<Vec<String>, AnalysisError> {
    let Value::Array(items) = value else {
        return Err(AnalysisError::InvalidShape { field });
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::String(text) => Ok(text),
            _ => Err(AnalysisError::InvalidShape { field }),
        })
        .collect()
}

/// Adapts a text generator into an [`IngredientAnalyst`].
///
/// The wrapped closure receives the ingredient list and returns the raw
/// generated text, or a description of why generation failed.
///
/// # Examples
/// ```
/// use labelwise_core::IngredientAnalyst;
/// use labelwise_scorer::GeneratedTextAnalyst;
///
/// let analyst = GeneratedTextAnalyst::new(|_ingredients: &str| -> Result<String, String> {
///     Ok(r#"{"positives": [], "warnings": ["High in sugar"]}"#.to_owned())
/// });
/// let analysis = analyst.analyse_or_fallback("Sugar, Cocoa");
/// assert_eq!(analysis.warnings, ["High in sugar"]);
/// ```
#[derive(Debug, Clone)]
pub struct GeneratedTextAnalyst<F> {
    generate: F,
}

impl<F> GeneratedTextAnalyst<F>
where
    F: Fn(&str) -> Result<String, String>,
{
    /// Wrap a text generator.
    #[must_use]
    pub const fn new(generate: F) -> Self {
        Self { generate }
    }
}

impl<F> IngredientAnalyst for GeneratedTextAnalyst<F>
where
    F: Fn(&str) -> Result<String, String>,
{
    fn analyse(&self, ingredients: &str) -> Result<Analysis, AnalystError> {
        let text = (self.generate)(ingredients)
            .map_err(|message| AnalystError::Service { message })?;
        parse_analysis(&text).map_err(|err| AnalystError::Response {
            source: Box::new(err),
        })
    }
}
