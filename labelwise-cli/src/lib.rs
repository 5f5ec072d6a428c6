//! Command-line interface for evaluating saved Open Food Facts responses.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use labelwise_core::MatchPolicy;
use serde::Serialize;

mod alternatives;
mod error;
mod filter;
mod score;

pub use error::CliError;

use alternatives::{AlternativesArgs, run_alternatives};
use filter::{FilterArgs, run_filter};
use score::{ScoreArgs, run_score};

pub(crate) const ARG_PRODUCT: &str = "product";
pub(crate) const ARG_SEARCH_RESULTS: &str = "search-results";
pub(crate) const ARG_PREFERENCES: &str = "preferences";
pub(crate) const ARG_ANALYSIS: &str = "analysis";
pub(crate) const ARG_MATCH_POLICY: &str = "match-policy";
pub(crate) const ARG_SEARCH: &str = "search";
pub(crate) const ARG_CATEGORY: &str = "category";
pub(crate) const ARG_CURATED: &str = "curated";
pub(crate) const ENV_SCORE_PRODUCT: &str = "LABELWISE_CMDS_SCORE_PRODUCT_PATH";
pub(crate) const ENV_FILTER_SEARCH_RESULTS: &str = "LABELWISE_CMDS_FILTER_SEARCH_RESULTS";
pub(crate) const ENV_ALTERNATIVES_PRODUCT: &str = "LABELWISE_CMDS_ALTERNATIVES_PRODUCT_PATH";
pub(crate) const ENV_ALTERNATIVES_SEARCH_RESULTS: &str =
    "LABELWISE_CMDS_ALTERNATIVES_SEARCH_RESULTS";

/// Run the Labelwise CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, inputs or output fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Score(args) => run_score(args, &mut stdout),
        Command::Filter(args) => run_filter(args, &mut stdout),
        Command::Alternatives(args) => run_alternatives(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "labelwise",
    about = "Score products and filter listings against dietary preferences",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a saved product response and explain the result.
    Score(ScoreArgs),
    /// Filter saved search results by the shopper's preferences.
    Filter(FilterArgs),
    /// Suggest healthier alternatives for a saved product.
    Alternatives(AlternativesArgs),
}

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match labelwise_data::fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) if path.exists() => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Ok(false) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Resolve the optional match policy option, defaulting to any-of.
pub(crate) fn parse_match_policy(raw: Option<&str>) -> Result<MatchPolicy, CliError> {
    let Some(value) = raw else {
        return Ok(MatchPolicy::default());
    };
    value
        .parse::<MatchPolicy>()
        .map_err(|reason| CliError::InvalidMatchPolicy {
            field: ARG_MATCH_POLICY,
            reason,
        })
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
