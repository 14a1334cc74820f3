//! Presentational components.

pub mod recipe_card;
