//! Unit tests for the filter command.

use super::helpers::{SEARCH_RESPONSE, Workspace};
use super::*;
use crate::filter::{FilterConfig, build_report, config_from_layers_for_test};
use rstest::rstest;

fn config_for(search_results: camino::Utf8PathBuf) -> FilterConfig {
    FilterConfig {
        search_results,
        preferences: None,
        match_policy: MatchPolicy::AnyOf,
        search: String::new(),
        category: "All".to_owned(),
    }
}

fn barcodes(report: &crate::filter::FilterReport) -> Vec<&str> {
    report
        .products
        .iter()
        .filter_map(|product| product.barcode.as_deref())
        .collect()
}

#[rstest]
fn converting_filter_without_results_errors() {
    let err =
        FilterConfig::try_from(FilterArgs::default()).expect_err("missing results should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_SEARCH_RESULTS);
            assert_eq!(env, ENV_FILTER_SEARCH_RESULTS);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn filter_config_defaults_query() {
    let args = FilterArgs {
        search_results: Some("results.json".into()),
        ..FilterArgs::default()
    };
    let config = FilterConfig::try_from(args).expect("config should build");
    assert_eq!(config.search, "");
    assert_eq!(config.category, labelwise_scorer::ALL_CATEGORIES);
    assert_eq!(config.match_policy, MatchPolicy::AnyOf);
}

#[rstest]
fn build_report_without_preferences_keeps_english_listings() {
    let workspace = Workspace::new();
    let config = config_for(workspace.write("results.json", SEARCH_RESPONSE));

    let report = build_report(&config).expect("report should build");
    assert_eq!(barcodes(&report), vec!["1", "2", "4"]);
    assert!(report.filtered_by.is_empty());
    assert!(
        report
            .products
            .iter()
            .all(|product| product.matched_labels.is_empty())
    );
}

#[rstest]
#[case::any_of(MatchPolicy::AnyOf, vec!["1", "4"])]
#[case::all_of(MatchPolicy::AllOf, vec!["1"])]
fn build_report_applies_match_policy(#[case] policy: MatchPolicy, #[case] expected: Vec<&str>) {
    let workspace = Workspace::new();
    let mut config = config_for(workspace.write("results.json", SEARCH_RESPONSE));
    config.preferences = Some(workspace.write(
        "prefs.json",
        r#"{"preferVegan": true, "preferOrganic": true}"#,
    ));
    config.match_policy = policy;

    let report = build_report(&config).expect("report should build");
    assert_eq!(barcodes(&report), expected);
    assert_eq!(report.filtered_by, vec!["Organic", "Vegan"]);
}

#[rstest]
fn build_report_reports_badges_in_evaluation_order() {
    let workspace = Workspace::new();
    let mut config = config_for(workspace.write("results.json", SEARCH_RESPONSE));
    config.preferences = Some(workspace.write(
        "prefs.json",
        r#"{"preferVegan": true, "preferOrganic": true}"#,
    ));

    let report = build_report(&config).expect("report should build");
    let first = report.products.first().expect("at least one product");
    assert_eq!(first.matched_labels, vec!["Organic".to_owned(), "Vegan".to_owned()]);
}

#[rstest]
#[case::search("HAZELNUT", "All", vec!["1", "2"])]
#[case::category("", "Butter", vec!["4"])]
#[case::both("organic", "spread", vec!["1"])]
fn build_report_applies_catalogue_query(
    #[case] search: &str,
    #[case] category: &str,
    #[case] expected: Vec<&str>,
) {
    let workspace = Workspace::new();
    let mut config = config_for(workspace.write("results.json", SEARCH_RESPONSE));
    search.clone_into(&mut config.search);
    category.clone_into(&mut config.category);

    let report = build_report(&config).expect("report should build");
    assert_eq!(barcodes(&report), expected);
}

#[rstest]
fn merge_layers_reads_policy_from_environment() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(json!({ "search_results": "results.json" }), None);
    composer.push_environment(json!({ "match_policy": "all-of", "category": "Snacks" }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.search_results, "results.json");
    assert_eq!(config.match_policy, MatchPolicy::AllOf);
    assert_eq!(config.category, "Snacks");
}
