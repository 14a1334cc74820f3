use super::*;

fn recipe(title: &str) -> Recipe {
    Recipe {
        title: Some(title.to_owned()),
        ..Recipe::default()
    }
}

// =============================================================
// parse_ingredients
// =============================================================

#[test]
fn parse_splits_on_comma_space() {
    assert_eq!(
        parse_ingredients("eggs, flour, milk"),
        vec!["eggs", "flour", "milk"]
    );
}

#[test]
fn parse_trims_each_token() {
    assert_eq!(parse_ingredients("eggs ,  flour"), vec!["eggs", "flour"]);
}

#[test]
fn parse_single_token_is_trimmed() {
    assert_eq!(parse_ingredients("  butter  "), vec!["butter"]);
}

#[test]
fn parse_empty_input_yields_one_empty_token() {
    assert_eq!(parse_ingredients(""), vec![""]);
}

#[test]
fn parse_delimiter_is_comma_space_not_comma() {
    // A bare comma is not a delimiter; the token stays whole.
    assert_eq!(parse_ingredients("salt,pepper"), vec!["salt,pepper"]);
}

#[test]
fn parse_keeps_duplicates_and_order() {
    assert_eq!(
        parse_ingredients("salt, sugar, salt"),
        vec!["salt", "sugar", "salt"]
    );
}

// =============================================================
// RecipesState defaults
// =============================================================

#[test]
fn default_state_is_idle() {
    let state = RecipesState::default();
    assert_eq!(state.view, ViewState::Idle);
    assert!(!state.is_loading());
}

// =============================================================
// Request lifecycle
// =============================================================

#[test]
fn begin_request_sets_loading() {
    let mut state = RecipesState::default();
    state.begin_request();
    assert!(state.is_loading());
}

#[test]
fn begin_request_bumps_generation() {
    let mut state = RecipesState::default();
    let first = state.begin_request();
    let second = state.begin_request();
    assert_eq!(first, 1);
    assert_eq!(second, 2);
}

#[test]
fn success_stores_results_and_clears_loading() {
    let mut state = RecipesState::default();
    let generation = state.begin_request();
    state.finish_request(generation, Ok(vec![recipe("Omelette")]));
    assert!(!state.is_loading());
    assert_eq!(state.view, ViewState::Results(vec![recipe("Omelette")]));
}

#[test]
fn failure_stores_error_and_clears_loading() {
    let mut state = RecipesState::default();
    let generation = state.begin_request();
    state.finish_request(generation, Err("request failed".to_owned()));
    assert!(!state.is_loading());
    assert_eq!(state.view, ViewState::Error("request failed".to_owned()));
}

#[test]
fn empty_results_are_still_results() {
    let mut state = RecipesState::default();
    let generation = state.begin_request();
    state.finish_request(generation, Ok(Vec::new()));
    assert_eq!(state.view, ViewState::Results(Vec::new()));
}

#[test]
fn new_request_discards_previous_results() {
    let mut state = RecipesState::default();
    let generation = state.begin_request();
    state.finish_request(generation, Ok(vec![recipe("Omelette")]));
    state.begin_request();
    assert_eq!(state.view, ViewState::Loading);
}

// =============================================================
// Overlapping submissions: latest request wins
// =============================================================

#[test]
fn stale_completion_is_dropped_while_newer_request_pending() {
    let mut state = RecipesState::default();
    let first = state.begin_request();
    let second = state.begin_request();
    state.finish_request(first, Ok(vec![recipe("Stale")]));
    assert!(state.is_loading());
    state.finish_request(second, Ok(vec![recipe("Fresh")]));
    assert_eq!(state.view, ViewState::Results(vec![recipe("Fresh")]));
}

#[test]
fn stale_completion_cannot_overwrite_newer_outcome() {
    let mut state = RecipesState::default();
    let first = state.begin_request();
    let second = state.begin_request();
    state.finish_request(second, Ok(vec![recipe("Fresh")]));
    state.finish_request(first, Err("request failed".to_owned()));
    assert_eq!(state.view, ViewState::Results(vec![recipe("Fresh")]));
}
