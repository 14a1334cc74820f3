//! REST API helpers for the recipe backend.
//!
//! In the browser (wasm32): real HTTP calls via `gloo-net`. Off-target
//! builds (native unit tests) get stubs returning an error, since the
//! fetch API only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are structured here so the cause can be logged, but the page
//! collapses every [`ApiError`] into one fixed user-facing message; the
//! user never sees status codes or transport details.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Recipe;

#[cfg(target_arch = "wasm32")]
use super::types::IngredientsRequest;

/// Base address of the backend. Fixed; the backend is an external
/// collaborator with no discovery or configuration surface.
const BASE_URL: &str = "http://localhost:5000";

fn endpoint(path: &str) -> String {
    format!("{BASE_URL}{path}")
}

/// A failed call to the recipe backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Fetch recipe recommendations for the given ingredients via
/// `POST /recommend`. The response is an ordered list of recipes.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, a non-2xx status, or an
/// unparseable response body.
pub async fn fetch_recommendations(ingredients: &[String]) -> Result<Vec<Recipe>, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let resp = post_ingredients("/recommend", ingredients).await?;
        resp.json::<Vec<Recipe>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = ingredients;
        Err(unavailable())
    }
}

/// Ask the backend to create a single new recipe from the given
/// ingredients via `POST /create`. The response is one recipe object,
/// not a list.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, a non-2xx status, or an
/// unparseable response body.
pub async fn create_recipe(ingredients: &[String]) -> Result<Recipe, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let resp = post_ingredients("/create", ingredients).await?;
        resp.json::<Recipe>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = ingredients;
        Err(unavailable())
    }
}

/// POST `{ "ingredients": [...] }` to `path` and check the status.
#[cfg(target_arch = "wasm32")]
async fn post_ingredients(
    path: &str,
    ingredients: &[String],
) -> Result<gloo_net::http::Response, ApiError> {
    let body = IngredientsRequest {
        ingredients: ingredients.to_vec(),
    };
    let resp = gloo_net::http::Request::post(&endpoint(path))
        .json(&body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp)
}

#[cfg(not(target_arch = "wasm32"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available outside the browser".to_owned())
}
