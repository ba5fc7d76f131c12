//! Terminal output formatting
//!
//! Display utilities for CLI reports and the text game.

pub mod display;
pub mod formatters;

pub use display::{print_catalog_report, print_simulation_result};
