//! Recipe assistant page: ingredient entry, recommend/create actions,
//! and the loading / error / results area.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::recipe_card::RecipeCard;
use crate::net::api;
use crate::state::recipes::{RecipesState, ViewState, parse_ingredients};

const RECOMMEND_ERROR: &str = "Failed to fetch recommendations. Please try again.";
const CREATE_ERROR: &str = "Failed to create a recipe. Please try again.";

/// The single page of the app.
///
/// One text input feeds two actions: fetching recommendations for the
/// entered ingredients, or asking the backend to create a new recipe
/// from them. Both actions share the loading/error/results area; if the
/// user fires a second request before the first settles, only the
/// latest one's outcome is shown.
#[component]
pub fn RecipesPage() -> impl IntoView {
    let recipes = expect_context::<RwSignal<RecipesState>>();

    let ingredients_text = RwSignal::new(String::new());

    let recommend = move || {
        let query = parse_ingredients(&ingredients_text.get());
        let Some(generation) = recipes.try_update(RecipesState::begin_request) else {
            return;
        };
        spawn_local(async move {
            let outcome = api::fetch_recommendations(&query).await.map_err(|err| {
                log::warn!("recommend request failed: {err}");
                RECOMMEND_ERROR.to_owned()
            });
            recipes.update(|state| state.finish_request(generation, outcome));
        });
    };

    let create = move || {
        let query = parse_ingredients(&ingredients_text.get());
        let Some(generation) = recipes.try_update(RecipesState::begin_request) else {
            return;
        };
        spawn_local(async move {
            let outcome = api::create_recipe(&query)
                .await
                .map(|recipe| vec![recipe])
                .map_err(|err| {
                    log::warn!("create request failed: {err}");
                    CREATE_ERROR.to_owned()
                });
            recipes.update(|state| state.finish_request(generation, outcome));
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            recommend();
        }
    };

    view! {
        <div class="recipes-page">
            <h1 class="recipes-page__title">"AICook: Recipe Intelligent Assistant"</h1>

            <input
                class="recipes-page__input"
                type="text"
                placeholder="Enter ingredients separated by commas"
                prop:value=move || ingredients_text.get()
                on:input=move |ev| ingredients_text.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <div class="recipes-page__actions">
                <button class="btn btn--primary" on:click=move |_| recommend()>
                    "Get Recommendations"
                </button>
                <button class="btn" on:click=move |_| create()>
                    "Create Recipe with Ingredients"
                </button>
            </div>

            {move || match recipes.get().view {
                ViewState::Idle => ().into_any(),
                ViewState::Loading => {
                    view! { <p class="recipes-page__loading">"Loading..."</p> }.into_any()
                }
                ViewState::Error(message) => {
                    view! { <p class="recipes-page__error">{message}</p> }.into_any()
                }
                ViewState::Results(list) => {
                    view! {
                        <div class="recipes-page__results">
                            {list
                                .into_iter()
                                .map(|recipe| view! { <RecipeCard recipe=recipe/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
