//! Root application component with context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::recipes::RecipesPage;
use crate::state::recipes::RecipesState;

/// Root application component.
///
/// Provides the shared recipe state context and renders the single page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let recipes = RwSignal::new(RecipesState::default());
    provide_context(recipes);

    view! {
        <Title text="AICook"/>

        <RecipesPage/>
    }
}
