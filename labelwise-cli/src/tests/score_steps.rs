//! Behaviour-driven step definitions driving the score CLI scenarios.

use super::helpers::{CannedAnalystBuilder, NOT_FOUND_RESPONSE, SPREAD_RESPONSE, Workspace};
use super::*;
use crate::score::{SavedAnswerAnalystBuilder, run_score_with};
use labelwise_core::test_support::CannedAnalyst;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug)]
struct ScoreWorld {
    workspace: Workspace,
    include_product: RefCell<bool>,
    analyst: RefCell<Option<CannedAnalyst>>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl ScoreWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            include_product: RefCell::new(true),
            analyst: RefCell::new(None),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["labelwise".to_owned(), "score".to_owned()];
        if *self.include_product.borrow() {
            argv.push(self.workspace.path("product.json").into_string());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn error(&self) -> String {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        format!("{error:?}")
    }
}

#[fixture]
fn world() -> ScoreWorld {
    ScoreWorld::new()
}

#[given("a saved product response exists on disk")]
fn saved_product_exists(#[from(world)] world: &ScoreWorld) {
    world.workspace.write("product.json", SPREAD_RESPONSE);
}

#[given("a not-found product response exists on disk")]
fn not_found_product_exists(#[from(world)] world: &ScoreWorld) {
    world.workspace.write("product.json", NOT_FOUND_RESPONSE);
}

#[given("a vegan preference profile exists on disk")]
fn vegan_profile_exists(#[from(world)] world: &ScoreWorld) {
    let path = world
        .workspace
        .write("prefs.json", r#"{"preferVegan": true}"#);
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_PREFERENCES}"), path.into_string()]);
}

#[given("I omit the product path")]
fn omit_product_path(#[from(world)] world: &ScoreWorld) {
    *world.include_product.borrow_mut() = false;
}

#[given("the match policy is set to most-of")]
fn match_policy_most_of(#[from(world)] world: &ScoreWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_MATCH_POLICY}"), "most-of".to_owned()]);
}

#[given("the ingredient analysis service is unavailable")]
fn analysis_service_unavailable(#[from(world)] world: &ScoreWorld) {
    world
        .analyst
        .replace(Some(CannedAnalyst::Outage("connection refused".to_owned())));
}

#[when("I run the score command")]
fn run_score_command(#[from(world)] world: &ScoreWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Score(args) => {
            let mut buffer = world.stdout.borrow_mut();
            match world.analyst.borrow().clone() {
                Some(analyst) => run_score_with(args, &CannedAnalystBuilder(analyst), &mut *buffer),
                None => run_score_with(args, &SavedAnswerAnalystBuilder, &mut *buffer),
            }
        }
        other => panic!("expected score command, found {other:?}"),
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints the health score")]
fn command_succeeds_with_score(#[from(world)] world: &ScoreWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("output should be JSON");
    assert_eq!(report.get("score"), Some(&serde_json::json!(90)));
    assert_eq!(report.get("band"), Some(&serde_json::json!("good")));
    assert_eq!(report.get("colour"), Some(&serde_json::json!("green")));
}

#[then("the output lists the Vegan badge")]
fn output_lists_vegan_badge(#[from(world)] world: &ScoreWorld) {
    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("output should be JSON");
    let labels = report
        .get("preferences")
        .and_then(|preferences| preferences.get("matched_labels"))
        .expect("matched labels present");
    assert_eq!(labels, &serde_json::json!(["Vegan"]));
}

#[then("the output carries the fallback analysis")]
fn output_carries_fallback_analysis(#[from(world)] world: &ScoreWorld) {
    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("output should be JSON");
    let fallback = serde_json::to_value(labelwise_core::Analysis::fallback())
        .expect("serialise fallback analysis");
    assert_eq!(report.get("analysis"), Some(&fallback));
}

#[then("the command fails because the product path is missing")]
fn command_fails_missing_product(#[from(world)] world: &ScoreWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_PRODUCT),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the match policy is invalid")]
fn command_fails_invalid_policy(#[from(world)] world: &ScoreWorld) {
    let rendered = world.error();
    assert!(rendered.starts_with("InvalidMatchPolicy"), "{rendered}");
}

#[then("the command fails because the product was not found")]
fn command_fails_not_found(#[from(world)] world: &ScoreWorld) {
    let rendered = world.error();
    assert!(rendered.starts_with("ProductNotFound"), "{rendered}");
}

macro_rules! register_score_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/score_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: ScoreWorld) {
            let _ = world;
        }
    };
}

register_score_scenario!(score_happy_path, "scoring a saved product");
register_score_scenario!(score_missing_product, "rejecting missing product paths");
register_score_scenario!(score_invalid_policy, "rejecting unknown match policies");
register_score_scenario!(score_analysis_outage, "falling back when the analysis service fails");
register_score_scenario!(score_not_found, "rejecting products the source does not know");
