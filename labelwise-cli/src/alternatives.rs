//! Alternatives command implementation for the Labelwise CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use labelwise_core::ProductFacts;
use labelwise_data::{load_curated_alternatives, load_product, load_search_results};
use labelwise_scorer::{CuratedAlternatives, FALLBACK_KEYWORD, alternative_keyword};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CURATED, ARG_PRODUCT, ARG_SEARCH_RESULTS, CliError, ENV_ALTERNATIVES_PRODUCT,
    ENV_ALTERNATIVES_SEARCH_RESULTS, require_existing, write_json,
};

/// CLI arguments for the `alternatives` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Suggest healthier alternatives for a saved product. The \
                 search keyword is derived from the product's most specific \
                 category; the saved search response is then narrowed to \
                 minimally processed products with a name and an image. \
                 A curated list fills in when no searched product \
                 qualifies or the search response cannot be read.",
    about = "Suggest healthier alternatives"
)]
#[ortho_config(prefix = "LABELWISE")]
pub(crate) struct AlternativesArgs {
    /// Path to a JSON product response (`{status, product}`).
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) product_path: Option<Utf8PathBuf>,
    /// Path to a JSON search response holding candidate products.
    #[arg(long = ARG_SEARCH_RESULTS, value_name = "path")]
    #[serde(default)]
    pub(crate) search_results: Option<Utf8PathBuf>,
    /// JSON map from keyword to hand-picked alternatives.
    #[arg(long = ARG_CURATED, value_name = "path")]
    #[serde(default)]
    pub(crate) curated: Option<Utf8PathBuf>,
}

impl AlternativesArgs {
    pub(crate) fn into_config(self) -> Result<AlternativesConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AlternativesConfig::try_from(merged)
    }
}

/// Resolved `alternatives` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AlternativesConfig {
    pub(crate) product_path: Utf8PathBuf,
    pub(crate) search_results: Utf8PathBuf,
    pub(crate) curated: Option<Utf8PathBuf>,
}

impl AlternativesConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.product_path, ARG_PRODUCT)?;
        require_existing(&self.search_results, ARG_SEARCH_RESULTS)?;
        if let Some(path) = &self.curated {
            require_existing(path, ARG_CURATED)?;
        }
        Ok(())
    }
}

impl TryFrom<AlternativesArgs> for AlternativesConfig {
    type Error = CliError;

    fn try_from(args: AlternativesArgs) -> Result<Self, Self::Error> {
        let product_path = args.product_path.ok_or(CliError::MissingArgument {
            field: ARG_PRODUCT,
            env: ENV_ALTERNATIVES_PRODUCT,
        })?;
        let search_results = args.search_results.ok_or(CliError::MissingArgument {
            field: ARG_SEARCH_RESULTS,
            env: ENV_ALTERNATIVES_SEARCH_RESULTS,
        })?;
        Ok(Self {
            product_path,
            search_results,
            curated: args.curated,
        })
    }
}

/// One suggested product in the `alternatives` output.
#[derive(Debug, Serialize)]
pub(crate) struct Suggestion {
    pub(crate) barcode: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) image_url: Option<String>,
}

/// JSON document printed by the `alternatives` command.
#[derive(Debug, Serialize)]
pub(crate) struct AlternativesReport {
    pub(crate) keyword: String,
    pub(crate) alternatives: Vec<Suggestion>,
}

pub(crate) fn run_alternatives(
    args: AlternativesArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let report = build_report(&config)?;
    write_json(writer, &report)
}

pub(crate) fn build_report(config: &AlternativesConfig) -> Result<AlternativesReport, CliError> {
    let facts = load_product(&config.product_path)?.ok_or_else(|| CliError::ProductNotFound {
        path: config.product_path.clone(),
    })?;
    let keyword = alternative_keyword(&facts.category_tags);
    let curated = config
        .curated
        .as_deref()
        .map(load_curated_alternatives)
        .transpose()?
        .map(CuratedAlternatives::new)
        .unwrap_or_default();
    let picked = pick_alternatives(config, &keyword, &curated)?;
    Ok(AlternativesReport {
        keyword,
        alternatives: picked
            .into_iter()
            .map(|candidate| Suggestion {
                name: candidate.display_name().map(str::to_owned),
                barcode: candidate.barcode,
                image_url: candidate.image_url,
            })
            .collect(),
    })
}

/// Select from the search response, or from the curated `chips` list when
/// the response is unreadable and a curated list was supplied.
fn pick_alternatives(
    config: &AlternativesConfig,
    keyword: &str,
    curated: &CuratedAlternatives,
) -> Result<Vec<ProductFacts>, CliError> {
    match load_search_results(&config.search_results) {
        Ok(candidates) => Ok(curated.select_or_curated(keyword, candidates)),
        Err(err) if !curated.is_empty() => {
            log::warn!("{err}; using curated {FALLBACK_KEYWORD} alternatives");
            Ok(curated.lookup(FALLBACK_KEYWORD).to_vec())
        }
        Err(err) => Err(err.into()),
    }
}
