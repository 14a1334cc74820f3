//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! One focused model per domain. The recipe page owns a single tagged
//! view state instead of independent loading/error/result flags, so the
//! mutually exclusive render states cannot drift apart.

pub mod recipes;
