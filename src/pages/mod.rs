//! Page-level components.

pub mod recipes;
