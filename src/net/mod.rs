//! Network layer: wire types and REST helpers for the recipe backend.

pub mod api;
pub mod types;
