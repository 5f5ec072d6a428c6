//! Score command implementation for the Labelwise CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use labelwise_core::{Analysis, IngredientAnalyst, MatchPolicy, MatchResult};
use labelwise_data::{fs::read_utf8_file, load_preferences, load_product};
use labelwise_scorer::{Assessment, GeneratedTextAnalyst, HealthScoreEngine, PreferenceMatcher};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_ANALYSIS, ARG_MATCH_POLICY, ARG_PREFERENCES, ARG_PRODUCT, CliError, ENV_SCORE_PRODUCT,
    parse_match_policy, require_existing, write_json,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score a saved Open Food Facts product response. The output \
                 lists every ingredient with its risk tier, the clamped \
                 health score and the nutrient breakdown. A preference \
                 profile adds the matched badges, and a saved model answer \
                 adds the ingredient analysis.",
    about = "Score a saved product response"
)]
#[ortho_config(prefix = "LABELWISE")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON product response (`{status, product}`).
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) product_path: Option<Utf8PathBuf>,
    /// Preference profile to match the product against.
    #[arg(long = ARG_PREFERENCES, value_name = "path")]
    #[serde(default)]
    pub(crate) preferences: Option<Utf8PathBuf>,
    /// Inclusion policy for preference matching (`any-of` or `all-of`).
    #[arg(long = ARG_MATCH_POLICY, value_name = "policy")]
    #[serde(default)]
    pub(crate) match_policy: Option<String>,
    /// Text file holding a generated ingredient analysis.
    #[arg(long = ARG_ANALYSIS, value_name = "path")]
    #[serde(default)]
    pub(crate) analysis: Option<Utf8PathBuf>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    pub(crate) product_path: Utf8PathBuf,
    pub(crate) preferences: Option<Utf8PathBuf>,
    pub(crate) match_policy: MatchPolicy,
    pub(crate) analysis: Option<Utf8PathBuf>,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.product_path, ARG_PRODUCT)?;
        if let Some(path) = &self.preferences {
            require_existing(path, ARG_PREFERENCES)?;
        }
        if let Some(path) = &self.analysis {
            require_existing(path, ARG_ANALYSIS)?;
        }
        Ok(())
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let product_path = args.product_path.ok_or(CliError::MissingArgument {
            field: ARG_PRODUCT,
            env: ENV_SCORE_PRODUCT,
        })?;
        let match_policy = parse_match_policy(args.match_policy.as_deref())?;
        Ok(Self {
            product_path,
            preferences: args.preferences,
            match_policy,
            analysis: args.analysis,
        })
    }
}

/// JSON document printed by the `score` command.
#[derive(Debug, Serialize)]
pub(crate) struct ScoreReport {
    pub(crate) barcode: Option<String>,
    pub(crate) name: Option<String>,
    #[serde(flatten)]
    pub(crate) assessment: Assessment,
    pub(crate) colour: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) preferences: Option<MatchResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) analysis: Option<Analysis>,
}

/// Builds the ingredient analyst for a resolved `score` configuration.
pub(crate) trait AnalystBuilder {
    fn build(&self, config: &ScoreConfig) -> Result<Option<Box<dyn IngredientAnalyst>>, CliError>;
}

/// Replays the model answer saved at `--analysis`, when one is configured.
pub(crate) struct SavedAnswerAnalystBuilder;

impl AnalystBuilder for SavedAnswerAnalystBuilder {
    fn build(
        &self,
        config: &ScoreConfig,
    ) -> Result<Option<Box<dyn IngredientAnalyst>>, CliError> {
        let analyst = config
            .analysis
            .as_deref()
            .map(|path| read_utf8_file(path).map(replay_answer))
            .transpose()?;
        Ok(analyst)
    }
}

fn replay_answer(generated: String) -> Box<dyn IngredientAnalyst> {
    Box::new(GeneratedTextAnalyst::new(
        move |_: &str| -> Result<String, String> { Ok(generated.clone()) },
    ))
}

pub(crate) fn run_score(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    run_score_with(args, &SavedAnswerAnalystBuilder, writer)
}

pub(crate) fn run_score_with(
    args: ScoreArgs,
    builder: &dyn AnalystBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let report = build_report(&config, builder)?;
    write_json(writer, &report)
}

pub(crate) fn build_report(
    config: &ScoreConfig,
    builder: &dyn AnalystBuilder,
) -> Result<ScoreReport, CliError> {
    let facts = load_product(&config.product_path)?.ok_or_else(|| CliError::ProductNotFound {
        path: config.product_path.clone(),
    })?;
    let assessment = HealthScoreEngine::default().assess(&facts);
    let matcher = PreferenceMatcher::new(config.match_policy);
    let preferences = config
        .preferences
        .as_deref()
        .map(|path| load_preferences(path).map(|prefs| matcher.matches(&facts, &prefs)))
        .transpose()?;
    let analysis = builder
        .build(config)?
        .map(|analyst| analyst.analyse_or_fallback(&facts.ingredients_text));
    Ok(ScoreReport {
        barcode: facts.barcode.clone(),
        name: facts.display_name().map(str::to_owned),
        colour: assessment.band.colour(),
        assessment,
        preferences,
        analysis,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
