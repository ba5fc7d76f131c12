//! Command implementations

pub mod inspect;
pub mod simple;
pub mod simulate;

pub use inspect::{CatalogReport, inspect_catalog};
pub use simple::{TextCommand, parse_command, play_text, run_simple};
pub use simulate::{SimulationConfig, SimulationResult, run_simulation};
