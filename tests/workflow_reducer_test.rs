// ABOUTME: Tests for the pure workflow transition function
// ABOUTME: Covers every step/event pair, guard failures, the loading gate, and totals invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, calorieninjas_config, egg_and_coffee, found_item, nutritionix_config};
use food_logger::aggregation::aggregate;
use food_logger::config::{ConfigField, NutritionProvider, SessionConfig};
use food_logger::errors::{ErrorCode, SessionError};
use food_logger::models::{ResolvedFoodItem, Step, Totals};
use food_logger::nutrition::NutritionCredentials;
use food_logger::workflow::{reduce, transition, Effect, Event, Session};

// ============================================================================
// Helpers
// ============================================================================

fn submitted(config: SessionConfig, text: &str) -> Session {
    reduce(&Session::new(config), Event::SubmitDescription(text.into()))
}

fn verifying() -> Session {
    let loading = submitted(calorieninjas_config(), "2 eggs and a cup of coffee");
    reduce(&loading, Event::ExtractionSucceeded(egg_and_coffee()))
}

fn confirming() -> Session {
    reduce(&verifying(), Event::Confirm)
}

fn results_with(items: Vec<ResolvedFoodItem>) -> Session {
    reduce(&confirming(), Event::NutritionSucceeded(items))
}

fn three_results() -> Session {
    results_with(vec![
        found_item("egg", 147.0, 12.6, 9.8, 0.8),
        found_item("coffee", 2.4, 0.3, 0.1, 0.0),
        found_item("toast", 75.0, 2.6, 1.0, 13.8),
    ])
}

fn failure(code: ErrorCode, message: &str) -> SessionError {
    SessionError {
        code,
        message: message.into(),
    }
}

fn assert_totals_consistent(session: &Session) {
    assert_eq!(session.totals(), aggregate(session.food_items()));
}

// ============================================================================
// INPUT
// ============================================================================

#[test]
fn test_new_session_starts_at_input() {
    let session = Session::new(calorieninjas_config());
    assert_eq!(session.step(), Step::Input);
    assert!(!session.is_loading());
    assert!(session.error().is_none());
    assert_eq!(session.totals(), Totals::default());
}

#[test]
fn test_submit_requests_extraction() {
    let session = Session::new(calorieninjas_config());
    let result = transition(&session, Event::SubmitDescription("2 eggs and a cup of coffee".into()));

    assert_eq!(result.session.step(), Step::Input);
    assert!(result.session.is_loading());
    assert_eq!(result.session.input_text(), "2 eggs and a cup of coffee");
    assert_eq!(
        result.effect,
        Some(Effect::Extract {
            description: "2 eggs and a cup of coffee".into(),
            llm_api_key: "sk-test".into(),
        })
    );
}

#[test]
fn test_submit_clears_prior_error() {
    let session = submitted(calorieninjas_config(), "   ");
    assert!(session.error().is_some());

    let session = reduce(&session, Event::SubmitDescription("an apple".into()));
    assert!(session.error().is_none());
    assert!(session.is_loading());
}

#[test]
fn test_submit_empty_text_sets_error() {
    let result = transition(
        &Session::new(calorieninjas_config()),
        Event::SubmitDescription("  \n ".into()),
    );

    assert!(result.effect.is_none());
    assert_eq!(result.session.step(), Step::Input);
    assert!(!result.session.is_loading());
    let error = result.session.error().unwrap();
    assert_eq!(error.code, ErrorCode::EmptyInput);
    assert_eq!(error.message, "Please enter a meal description.");
}

#[test]
fn test_submit_without_llm_key_sets_missing_credentials() {
    let config = SessionConfig {
        llm_api_key: String::new(),
        ..calorieninjas_config()
    };
    let result = transition(&Session::new(config), Event::SubmitDescription("an apple".into()));

    assert!(result.effect.is_none());
    assert_eq!(result.session.error().unwrap().code, ErrorCode::MissingCredentials);
    assert_eq!(result.session.input_text(), "an apple");
}

#[test]
fn test_submit_without_nutritionix_pair_sets_missing_credentials() {
    let config = SessionConfig {
        nutritionix_app_key: String::new(),
        ..nutritionix_config()
    };
    let result = transition(&Session::new(config), Event::SubmitDescription("an apple".into()));

    assert!(result.effect.is_none());
    assert!(!result.session.is_loading());
    assert_eq!(result.session.error().unwrap().code, ErrorCode::MissingCredentials);
}

#[test]
fn test_credentials_are_checked_before_empty_text() {
    let session = submitted(SessionConfig::default(), "");
    assert_eq!(session.error().unwrap().code, ErrorCode::MissingCredentials);
}

#[test]
fn test_resubmit_while_loading_is_ignored() {
    let loading = submitted(calorieninjas_config(), "an apple");
    let result = transition(&loading, Event::SubmitDescription("a pear".into()));

    assert!(result.effect.is_none());
    assert_eq!(result.session, loading);
}

#[test]
fn test_extraction_success_moves_to_verify() {
    let session = verifying();
    assert_eq!(session.step(), Step::Verify);
    assert!(!session.is_loading());
    assert_eq!(session.parsed_items(), egg_and_coffee().as_slice());
}

#[test]
fn test_extraction_success_with_empty_list_is_accepted() {
    let loading = submitted(calorieninjas_config(), "nothing really");
    let session = reduce(&loading, Event::ExtractionSucceeded(Vec::new()));
    assert_eq!(session.step(), Step::Verify);
    assert!(session.parsed_items().is_empty());
}

#[test]
fn test_extraction_failure_stays_on_input() {
    let loading = submitted(calorieninjas_config(), "2 eggs");
    let session = reduce(
        &loading,
        Event::ExtractionFailed(failure(ErrorCode::ProviderUnavailable, "LLM Error: overloaded")),
    );

    assert_eq!(session.step(), Step::Input);
    assert!(!session.is_loading());
    assert_eq!(session.input_text(), "2 eggs");
    assert_eq!(session.error().unwrap().message, "LLM Error: overloaded");
}

#[test]
fn test_extraction_outcome_without_pending_call_is_ignored() {
    let idle = Session::new(calorieninjas_config());
    assert_eq!(reduce(&idle, Event::ExtractionSucceeded(egg_and_coffee())), idle);
    assert_eq!(
        reduce(&idle, Event::ExtractionFailed(failure(ErrorCode::InternalError, "late"))),
        idle
    );
}

#[test]
fn test_edit_description_only_in_idle_input() {
    let idle = Session::new(calorieninjas_config());
    let edited = reduce(&idle, Event::EditDescription("a banana".into()));
    assert_eq!(edited.input_text(), "a banana");

    let loading = submitted(calorieninjas_config(), "an apple");
    let unchanged = reduce(&loading, Event::EditDescription("a banana".into()));
    assert_eq!(unchanged.input_text(), "an apple");
}

// ============================================================================
// VERIFY
// ============================================================================

#[test]
fn test_confirm_requests_nutrition() {
    let result = transition(&verifying(), Event::Confirm);

    assert_eq!(result.session.step(), Step::Verify);
    assert!(result.session.is_loading());
    assert_eq!(
        result.effect,
        Some(Effect::ResolveNutrition {
            items: egg_and_coffee(),
            credentials: NutritionCredentials::CalorieNinjas {
                api_key: "cn-test".into()
            },
        })
    );
}

#[test]
fn test_confirm_while_loading_is_ignored() {
    let loading = confirming();
    let result = transition(&loading, Event::Confirm);
    assert!(result.effect.is_none());
    assert_eq!(result.session, loading);
}

#[test]
fn test_confirm_after_credentials_removed_sets_error() {
    let session = reduce(
        &verifying(),
        Event::SetConfig {
            field: ConfigField::NutritionApiKey,
            value: String::new(),
        },
    );
    let result = transition(&session, Event::Confirm);

    assert!(result.effect.is_none());
    assert_eq!(result.session.step(), Step::Verify);
    assert_eq!(result.session.error().unwrap().code, ErrorCode::MissingCredentials);
}

#[test]
fn test_nutrition_success_moves_to_results_with_totals() {
    let session = results_with(vec![
        found_item("egg", 147.0, 12.6, 9.8, 0.8),
        found_item("coffee", 2.4, 0.3, 0.1, 0.0),
    ]);

    assert_eq!(session.step(), Step::Results);
    assert!(!session.is_loading());
    assert_eq!(session.food_items().len(), 2);
    assert_close(session.totals().calories, 149.4);
    assert_totals_consistent(&session);
}

#[test]
fn test_nutrition_failure_keeps_parsed_items() {
    let session = reduce(
        &confirming(),
        Event::NutritionFailed(failure(
            ErrorCode::ProviderUnavailable,
            "Failed to fetch nutrition data. Please check your API key and try again.",
        )),
    );

    assert_eq!(session.step(), Step::Verify);
    assert!(!session.is_loading());
    assert_eq!(session.parsed_items(), egg_and_coffee().as_slice());
    assert_eq!(session.error().unwrap().code, ErrorCode::ProviderUnavailable);
}

#[test]
fn test_back_returns_to_input_preserving_text() {
    let session = reduce(&verifying(), Event::Back);

    assert_eq!(session.step(), Step::Input);
    assert_eq!(session.input_text(), "2 eggs and a cup of coffee");
    assert!(session.parsed_items().is_empty());
    assert!(session.error().is_none());
}

#[test]
fn test_back_while_loading_is_ignored() {
    let loading = confirming();
    assert_eq!(reduce(&loading, Event::Back), loading);
}

// ============================================================================
// RESULTS
// ============================================================================

#[test]
fn test_remove_item_preserves_order_and_recomputes() {
    let session = reduce(&three_results(), Event::RemoveItem(1));

    let names: Vec<_> = session.food_items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["egg", "toast"]);
    assert_close(session.totals().calories, 222.0);
    assert_totals_consistent(&session);
}

#[test]
fn test_remove_every_item_yields_zero_totals() {
    let mut session = three_results();
    for _ in 0..3 {
        session = reduce(&session, Event::RemoveItem(0));
        assert_totals_consistent(&session);
    }
    assert!(session.food_items().is_empty());
    assert_eq!(session.totals(), Totals::default());
    assert_eq!(session.step(), Step::Results);
}

#[test]
fn test_remove_out_of_bounds_sets_error() {
    let before = three_results();
    let after = reduce(&before, Event::RemoveItem(3));

    assert_eq!(after.food_items(), before.food_items());
    assert_eq!(after.error().unwrap().code, ErrorCode::InvalidInput);
    assert_eq!(after.step(), Step::Results);
}

#[test]
fn test_remove_at_max_index_sets_error_without_overflow() {
    let before = results_with(vec![found_item("egg", 147.0, 12.6, 9.8, 0.8)]);
    let after = reduce(&before, Event::RemoveItem(usize::MAX));

    assert_eq!(after.food_items(), before.food_items());
    assert_eq!(after.totals(), before.totals());
    let error = after.error().unwrap();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(
        error.message,
        format!("There is no item number {}.", usize::MAX)
    );
}

#[test]
fn test_remove_outside_results_is_ignored() {
    let session = verifying();
    assert_eq!(reduce(&session, Event::RemoveItem(0)), session);
}

#[test]
fn test_start_over_clears_lists_and_keeps_text() {
    let session = reduce(&three_results(), Event::StartOver);

    assert_eq!(session.step(), Step::Input);
    assert_eq!(session.input_text(), "2 eggs and a cup of coffee");
    assert!(session.parsed_items().is_empty());
    assert!(session.food_items().is_empty());
    assert_eq!(session.totals(), Totals::default());
    assert!(session.error().is_none());
}

#[test]
fn test_not_found_items_are_kept_but_not_counted() {
    let session = results_with(vec![
        found_item("egg", 147.0, 12.6, 9.8, 0.8),
        ResolvedFoodItem::not_found("unicorn steak"),
    ]);

    assert_eq!(session.food_items().len(), 2);
    assert_close(session.totals().calories, 147.0);
}

#[test]
fn test_results_are_positional_without_reconciliation() {
    // Two items requested, the provider answered with one differently named record
    let session = results_with(vec![found_item("eggs, whole", 143.0, 12.6, 9.5, 0.7)]);

    assert_eq!(session.parsed_items().len(), 2);
    assert_eq!(session.food_items().len(), 1);
    assert_eq!(session.food_items()[0].name, "eggs, whole");
}

// ============================================================================
// Any step
// ============================================================================

#[test]
fn test_set_config_updates_one_field() {
    let session = reduce(
        &verifying(),
        Event::SetConfig {
            field: ConfigField::NutritionProvider,
            value: "nutritionix".into(),
        },
    );

    assert_eq!(session.step(), Step::Verify);
    assert_eq!(session.config().nutrition_provider, NutritionProvider::Nutritionix);
    assert_eq!(session.config().nutrition_api_key, "cn-test");
}

#[test]
fn test_set_config_with_unknown_provider_sets_error() {
    let before = Session::new(calorieninjas_config());
    let after = reduce(
        &before,
        Event::SetConfig {
            field: ConfigField::NutritionProvider,
            value: "edamam".into(),
        },
    );

    assert_eq!(after.config(), before.config());
    assert_eq!(after.error().unwrap().code, ErrorCode::InvalidInput);
}

#[test]
fn test_toggle_micros_in_any_step() {
    let session = reduce(&three_results(), Event::ToggleMicros(true));
    assert!(session.show_micros());
    assert_eq!(session.step(), Step::Results);

    let session = reduce(&session, Event::ToggleMicros(false));
    assert!(!session.show_micros());
}

#[test]
fn test_dismiss_error_touches_nothing_else() {
    let with_error = submitted(calorieninjas_config(), "");
    let dismissed = reduce(&with_error, Event::DismissError);

    assert!(dismissed.error().is_none());
    assert_eq!(dismissed.step(), with_error.step());
    assert_eq!(dismissed.input_text(), with_error.input_text());
}

#[test]
fn test_transition_does_not_mutate_input_session() {
    let session = verifying();
    let copy = session.clone();
    let _ = transition(&session, Event::Back);
    assert_eq!(session, copy);
}

#[test]
fn test_snapshot_hides_secrets() {
    let snapshot = verifying().snapshot();
    assert!(snapshot.configuration.llm_api_key_set);
    assert!(snapshot.configuration.nutrition_api_key_set);
    assert!(!snapshot.configuration.nutritionix_app_key_set);

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(!json.contains("sk-test"));
    assert!(!json.contains("cn-test"));
    assert!(json.contains("\"VERIFY\""));
}
