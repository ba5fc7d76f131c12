//! Quartet
//!
//! A "find the group of four" word puzzle: a catalog of categories, one of them
//! pinned into every session, and an engine that validates guesses, counts
//! mistakes and detects completion.
//!
//! # Quick Start
//!
//! ```rust
//! use quartet::catalog::Catalog;
//! use quartet::puzzle::{GuessOutcome, Puzzle};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let mut puzzle = Puzzle::seeded(&catalog, 4, 42).unwrap();
//!
//! // The pinned category is in every session
//! for word in catalog.pinned().next().unwrap().words() {
//!     puzzle.toggle_word(word);
//! }
//! assert!(matches!(puzzle.submit_guess(), GuessOutcome::Solved(_)));
//! ```

// Core domain types
pub mod core;

// Category definitions
pub mod catalog;

// Selection, shuffling, validation and the engine
pub mod puzzle;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
