//! Filter command implementation for the Labelwise CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use labelwise_core::MatchPolicy;
use labelwise_data::{load_preferences, load_search_results};
use labelwise_scorer::{ALL_CATEGORIES, CatalogueQuery, PreferenceMatcher};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CATEGORY, ARG_MATCH_POLICY, ARG_PREFERENCES, ARG_SEARCH, ARG_SEARCH_RESULTS, CliError,
    ENV_FILTER_SEARCH_RESULTS, parse_match_policy, require_existing, write_json,
};

/// CLI arguments for the `filter` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Filter a saved Open Food Facts search response. Only \
                 named English products are listed; each must satisfy the \
                 active preferences under the chosen match policy and the \
                 optional search text and category.",
    about = "Filter saved search results by preference"
)]
#[ortho_config(prefix = "LABELWISE")]
pub(crate) struct FilterArgs {
    /// Path to a JSON search response (`{products: [...]}`).
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) search_results: Option<Utf8PathBuf>,
    /// Preference profile; every product is kept when omitted.
    #[arg(long = ARG_PREFERENCES, value_name = "path")]
    #[serde(default)]
    pub(crate) preferences: Option<Utf8PathBuf>,
    /// Inclusion policy for preference matching (`any-of` or `all-of`).
    #[arg(long = ARG_MATCH_POLICY, value_name = "policy")]
    #[serde(default)]
    pub(crate) match_policy: Option<String>,
    /// Case-insensitive text the product name must contain.
    #[arg(long = ARG_SEARCH, value_name = "text")]
    #[serde(default)]
    pub(crate) search: Option<String>,
    /// Category the product name must mention; `All` disables the check.
    #[arg(long = ARG_CATEGORY, value_name = "name")]
    #[serde(default)]
    pub(crate) category: Option<String>,
}

impl FilterArgs {
    pub(crate) fn into_config(self) -> Result<FilterConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        FilterConfig::try_from(merged)
    }
}

/// Resolved `filter` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FilterConfig {
    pub(crate) search_results: Utf8PathBuf,
    pub(crate) preferences: Option<Utf8PathBuf>,
    pub(crate) match_policy: MatchPolicy,
    pub(crate) search: String,
    pub(crate) category: String,
}

impl FilterConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.search_results, ARG_SEARCH_RESULTS)?;
        if let Some(path) = &self.preferences {
            require_existing(path, ARG_PREFERENCES)?;
        }
        Ok(())
    }
}

impl TryFrom<FilterArgs> for FilterConfig {
    type Error = CliError;

    fn try_from(args: FilterArgs) -> Result<Self, Self::Error> {
        let search_results = args.search_results.ok_or(CliError::MissingArgument {
            field: ARG_SEARCH_RESULTS,
            env: ENV_FILTER_SEARCH_RESULTS,
        })?;
        let match_policy = parse_match_policy(args.match_policy.as_deref())?;
        Ok(Self {
            search_results,
            preferences: args.preferences,
            match_policy,
            search: args.search.unwrap_or_default(),
            category: args
                .category
                .unwrap_or_else(|| ALL_CATEGORIES.to_owned()),
        })
    }
}

/// One kept product in the `filter` output.
#[derive(Debug, Serialize)]
pub(crate) struct ListedProduct {
    pub(crate) barcode: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) matched_labels: Vec<String>,
}

/// JSON document printed by the `filter` command.
#[derive(Debug, Serialize)]
pub(crate) struct FilterReport {
    pub(crate) match_policy: MatchPolicy,
    pub(crate) filtered_by: Vec<&'static str>,
    pub(crate) products: Vec<ListedProduct>,
}

pub(crate) fn run_filter(args: FilterArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let report = build_report(&config)?;
    write_json(writer, &report)
}

pub(crate) fn build_report(config: &FilterConfig) -> Result<FilterReport, CliError> {
    let products = load_search_results(&config.search_results)?;
    let prefs = config
        .preferences
        .as_deref()
        .map(load_preferences)
        .transpose()?
        .unwrap_or_default();
    let query = CatalogueQuery::new(config.search.as_str(), config.category.as_str());
    let kept = PreferenceMatcher::new(config.match_policy)
        .filter_products(products.iter().filter(|facts| query.accepts(facts)), &prefs);
    log::debug!(
        "kept {} of {} products from {}",
        kept.len(),
        products.len(),
        config.search_results
    );
    Ok(FilterReport {
        match_policy: config.match_policy,
        filtered_by: prefs.active_filter_labels(),
        products: kept
            .into_iter()
            .map(|(facts, result)| ListedProduct {
                barcode: facts.barcode.clone(),
                name: facts.display_name().map(str::to_owned),
                matched_labels: result.matched_labels,
            })
            .collect(),
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<FilterConfig, CliError> {
    let merged = FilterArgs::merge_from_layers(layers).map_err(CliError::from)?;
    FilterConfig::try_from(merged)
}
