#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for preference matching.

use std::cell::{Cell, RefCell};

use labelwise_core::{MatchPolicy, MatchResult, Preference, PreferenceSet, ProductFacts};
use labelwise_scorer::PreferenceMatcher;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Shared state for the preference matching scenarios.
pub struct TestContext {
    prefs: Cell<PreferenceSet>,
    product: RefCell<Option<ProductFacts>>,
    result: RefCell<Option<MatchResult>>,
    listing: RefCell<Option<Vec<ProductFacts>>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        prefs: Cell::new(PreferenceSet::default()),
        product: RefCell::new(None),
        result: RefCell::new(None),
        listing: RefCell::new(None),
    }
}

#[given("a shopper who prefers vegan products")]
fn vegan_shopper(context: &TestContext) {
    context
        .prefs
        .set(PreferenceSet::default().with(Preference::PreferVegan));
}

#[given("a shopper who prefers vegan and organic products")]
fn vegan_organic_shopper(context: &TestContext) {
    context.prefs.set(
        PreferenceSet::default()
            .with(Preference::PreferVegan)
            .with(Preference::PreferOrganic),
    );
}

#[given("a shopper with no active preferences")]
fn indifferent_shopper(context: &TestContext) {
    context.prefs.set(PreferenceSet::default());
}

#[given("an English product labelled vegan")]
fn english_vegan_product(context: &TestContext) {
    *context.product.borrow_mut() = Some(vegan_product("en"));
}

#[given("a French product labelled vegan")]
fn french_vegan_product(context: &TestContext) {
    *context.product.borrow_mut() = Some(vegan_product("fr"));
}

#[when("the product is matched with the any-of policy")]
fn match_any_of(context: &TestContext) {
    match_with(context, MatchPolicy::AnyOf);
}

#[when("the product is matched with the all-of policy")]
fn match_all_of(context: &TestContext) {
    match_with(context, MatchPolicy::AllOf);
}

#[when("the listing is filtered with the any-of policy")]
fn filter_listing(context: &TestContext) {
    let product = product(context);
    let prefs = context.prefs.get();
    let kept: Vec<ProductFacts> = PreferenceMatcher::new(MatchPolicy::AnyOf)
        .filter_products([&product], &prefs)
        .into_iter()
        .map(|(facts, _)| facts.clone())
        .collect();
    *context.listing.borrow_mut() = Some(kept);
}

#[then("the product is included")]
fn is_included(context: &TestContext) {
    assert!(result(context).included);
}

#[then("the product is excluded")]
fn is_excluded(context: &TestContext) {
    assert!(!result(context).included);
}

#[then("the matched labels are exactly Vegan")]
fn labels_are_vegan(context: &TestContext) {
    assert_eq!(result(context).matched_labels, vec!["Vegan"]);
}

#[then("no labels are matched")]
fn no_labels(context: &TestContext) {
    assert!(result(context).matched_labels.is_empty());
}

#[then("the listing is empty")]
fn listing_is_empty(context: &TestContext) {
    let listing = context
        .listing
        .borrow()
        .clone()
        .expect("listing should be recorded");
    assert!(listing.is_empty());
}

fn vegan_product(language: &str) -> ProductFacts {
    ProductFacts::new("Oats, Water")
        .with_name("Oat Drink")
        .with_language(language)
        .with_label_tags(["en:vegan"])
}

fn product(context: &TestContext) -> ProductFacts {
    context
        .product
        .borrow()
        .clone()
        .expect("product should be initialised")
}

fn match_with(context: &TestContext, policy: MatchPolicy) {
    let product = product(context);
    let outcome = PreferenceMatcher::new(policy).matches(&product, &context.prefs.get());
    *context.result.borrow_mut() = Some(outcome);
}

fn result(context: &TestContext) -> MatchResult {
    context
        .result
        .borrow()
        .clone()
        .expect("match result should be recorded")
}

#[scenario(path = "tests/features/preference_matching.feature", index = 0)]
fn vegan_shopper_sees_vegan_product(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/preference_matching.feature", index = 1)]
fn no_preferences_include_everything(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/preference_matching.feature", index = 2)]
fn all_of_rejects_partial_matches(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/preference_matching.feature", index = 3)]
fn listings_require_english(context: TestContext) {
    let _ = context;
}
