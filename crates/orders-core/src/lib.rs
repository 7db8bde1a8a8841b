//! Domain layer for the orders analyzer.
//!
//! Holds the order record model, the suspicion classifier, shared error
//! types, and the small formatting and time-parsing helpers used by the
//! data layer and the CLI.

pub mod classifier;
pub mod error;
pub mod formatting;
pub mod models;
pub mod time_utils;
