//! # aicook-ui
//!
//! Leptos + WASM frontend for the AICook recipe assistant.
//!
//! This crate contains the page, presentational components, application
//! state, and the REST client for the external `/recommend` and `/create`
//! endpoints. It is client-side rendered and mounted from `main.rs`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
