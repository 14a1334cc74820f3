//! Card component for a single recipe result.

use leptos::prelude::*;

use crate::net::types::Recipe;

/// One recipe card: title, itemized ingredients, instructions.
///
/// Missing fields render as fixed placeholder text, so a sparse backend
/// response still produces a complete card.
#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let title = recipe.title_text().to_owned();
    let items = recipe.ingredient_items();
    let instructions = recipe.instructions_text().to_owned();

    view! {
        <div class="recipe-card">
            <h2 class="recipe-card__title">{title}</h2>
            <h3>"Ingredients:"</h3>
            <ul class="recipe-card__ingredients">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect::<Vec<_>>()}
            </ul>
            <h3>"Instructions:"</h3>
            <p class="recipe-card__instructions">{instructions}</p>
        </div>
    }
}
