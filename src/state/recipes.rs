#[cfg(test)]
#[path = "recipes_test.rs"]
mod recipes_test;

use crate::net::types::Recipe;

/// Parse the raw ingredient input into discrete query tokens.
///
/// The delimiter is the literal `", "`; each token is trimmed afterwards.
/// Tokens are not deduplicated and keep their input order. An input with
/// no delimiter yields a single trimmed token, so an empty input yields
/// one empty token, which is still sent to the backend.
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    raw.split(", ").map(|item| item.trim().to_owned()).collect()
}

/// What the results area of the page currently shows.
///
/// Exactly one variant is active at a time: a request in flight replaces
/// any previous results or error with `Loading`, and its outcome replaces
/// `Loading` in turn. `Idle` (nothing submitted yet) and `Results` with an
/// empty list render identically on purpose.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Results(Vec<Recipe>),
}

/// State for the recipe page, shared via context.
///
/// The generation counter guards against overlapping submissions: each
/// request takes a token from [`begin_request`](Self::begin_request) and
/// only the latest token may commit an outcome. Without it, two in-flight
/// requests would race and the slower one would win.
#[derive(Clone, Debug, Default)]
pub struct RecipesState {
    generation: u64,
    pub view: ViewState,
}

impl RecipesState {
    /// Start a new request: bump the generation and show the loading
    /// indicator, discarding any stale results or error.
    ///
    /// Returns the token the caller must pass back to
    /// [`finish_request`](Self::finish_request).
    pub fn begin_request(&mut self) -> u64 {
        self.generation += 1;
        self.view = ViewState::Loading;
        self.generation
    }

    /// Commit a request outcome, unless a newer request has started since
    /// `generation` was issued (stale completions are dropped).
    pub fn finish_request(&mut self, generation: u64, outcome: Result<Vec<Recipe>, String>) {
        if generation != self.generation {
            log::debug!("dropping stale completion for request {generation}");
            return;
        }
        self.view = match outcome {
            Ok(recipes) => ViewState::Results(recipes),
            Err(message) => ViewState::Error(message),
        };
    }

    /// Whether a request is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.view == ViewState::Loading
    }
}
